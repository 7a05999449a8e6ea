//! In-memory doubles of the client's collaborators.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contracts::shared::errors::NetworkError;
use serde_json::Value;

use super::navigator::Navigator;
use super::session::MemorySessionStore;
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::ApiClient;
use crate::shared::api_utils::ApiConfig;

/// Replays queued responses in order and records every request
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, NetworkError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(json_response(status, body));
    }

    pub fn push_network_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(NetworkError::new(message)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Path and query of the last request, without the test base URL
    pub fn last_endpoint(&self) -> String {
        self.last_request()
            .map(|r| r.url.trim_start_matches(TEST_BASE_URL).to_string())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::new("no response queued")))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }

    fn open_new_tab(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

pub const TEST_BASE_URL: &str = "http://api.test";

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        content_type: Some("application/json".to_string()),
        body: body.to_string(),
    }
}

pub fn test_client(
    transport: MockTransport,
) -> (ApiClient, Arc<MemorySessionStore>, Arc<RecordingNavigator>) {
    let session = Arc::new(MemorySessionStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        ApiConfig::new(TEST_BASE_URL, "production", Some("test-key".to_string())),
        session.clone(),
        Arc::new(transport),
        navigator.clone(),
    );
    (client, session, navigator)
}
