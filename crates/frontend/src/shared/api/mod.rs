//! Single chokepoint for outbound calls to the admin API.
//!
//! Every request goes through [`ApiClient`]: it builds the URL, attaches the
//! gateway key and the bearer token, decodes JSON bodies and turns failures
//! into [`AppError`]. A 401 from any endpoint ends the session and sends the
//! browser to the login page.

pub mod envelope;
pub mod navigator;
pub mod session;
pub mod transport;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use contracts::shared::errors::{AppError, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::ApiConfig;
use crate::system::auth::storage::LocalStorageSession;
use navigator::{BrowserNavigator, Navigator, LOGIN_PATH};
use session::SessionStore;
use transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport};

/// Decoded answer of a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Parsed body; `None` when the response was not JSON or did not parse
    pub data: Option<Value>,
    pub status: u16,
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        session: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
            navigator,
        }
    }

    /// Client wired to `fetch`, `localStorage` and `window.location`.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(
            config,
            Arc::new(LocalStorageSession),
            Arc::new(GlooTransport),
            Arc::new(BrowserNavigator),
        )
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn url(&self, endpoint: &str) -> String {
        self.config.build_url(endpoint)
    }

    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        let body = encode_body(body, endpoint)?;
        self.request(Method::Post, endpoint, Some(body)).await
    }

    /// POST without a request body
    pub async fn post_empty(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        self.request(Method::Post, endpoint, None).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        let body = encode_body(body, endpoint)?;
        self.request(Method::Put, endpoint, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        let body = encode_body(body, endpoint)?;
        self.request(Method::Patch, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        self.request(Method::Delete, endpoint, None).await
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        match &self.config.gateway_key {
            Some(key) => headers.push(("x-api-key".to_string(), key.clone())),
            None => log::warn!("x-api-key not configured, request will likely be rejected"),
        }

        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        headers
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, AppError> {
        let url = self.url(endpoint);
        log::debug!("{} {}", method, url);

        let request = HttpRequest {
            method,
            url,
            headers: self.headers(),
            body,
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = AppError::Network(e);
                log_error(&err, endpoint);
                return Err(err);
            }
        };

        let data = decode_body(&response, endpoint);
        log::debug!("{} {} -> {}", method, endpoint, response.status);

        if !response.is_success() {
            let err = AppError::from_response(response.status, &response.status_text, data.as_ref());
            if response.status == 401 {
                log::warn!("Session rejected by the server, signing out");
                self.session.clear();
                self.navigator.redirect(LOGIN_PATH);
            }
            log_error(&err, endpoint);
            return Err(err);
        }

        Ok(ApiResponse {
            data,
            status: response.status,
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B, endpoint: &str) -> Result<String, AppError> {
    serde_json::to_string(body).map_err(|e| {
        let err = AppError::Validation(ValidationError::new(format!(
            "No se pudo serializar la solicitud: {}",
            e
        )));
        log_error(&err, endpoint);
        err
    })
}

fn decode_body(response: &HttpResponse, endpoint: &str) -> Option<Value> {
    if !response.is_json() {
        return None;
    }
    match serde_json::from_str(&response.body) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}: failed to parse JSON body: {}", endpoint, e);
            None
        }
    }
}

/// Structured error line with timestamp and context.
pub fn log_error(err: &AppError, context: &str) {
    let record = serde_json::to_string(&err.to_record()).unwrap_or_default();
    log::error!(
        "[{}] {}: {}",
        chrono::Utc::now().to_rfc3339(),
        context,
        record
    );
}

#[cfg(test)]
mod tests {
    use super::testing::{json_response, test_client, MockTransport};
    use super::transport::HttpResponse;
    use super::*;
    use contracts::shared::errors::{AuthErrorCode, NETWORK_ERROR};
    use serde_json::json;

    #[tokio::test]
    async fn test_attaches_gateway_key_and_bearer() {
        let transport = MockTransport::new();
        transport.push(json_response(200, json!({"ok": true})));
        let (client, session, _) = test_client(transport.clone());
        session.set_token("tok-123");

        let response = client.get("/api/admin/users").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data, Some(json!({"ok": true})));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.test/api/admin/users");
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.header("x-api-key"), Some("test-key"));
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn test_no_bearer_without_session() {
        let transport = MockTransport::new();
        transport.push(json_response(200, json!({})));
        let (client, _, _) = test_client(transport.clone());

        client.post("/api/auth/login", &json!({"email": "a@b.cl"})).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.body.as_deref(), Some(r#"{"email":"a@b.cl"}"#));
    }

    #[tokio::test]
    async fn test_non_json_body_is_ignored() {
        let transport = MockTransport::new();
        transport.push(HttpResponse {
            status: 200,
            status_text: "OK".into(),
            content_type: Some("text/plain".into()),
            body: "hello".into(),
        });
        transport.push(HttpResponse {
            status: 200,
            status_text: "OK".into(),
            content_type: Some("application/json; charset=utf-8".into()),
            body: "{not json".into(),
        });
        let (client, _, _) = test_client(transport);

        assert_eq!(client.get("/a").await.unwrap().data, None);
        assert_eq!(client.get("/b").await.unwrap().data, None);
    }

    #[tokio::test]
    async fn test_error_status_is_preserved() {
        let transport = MockTransport::new();
        for status in [400u16, 404, 409, 422, 500, 503] {
            transport.push(json_response(status, json!({"message": "boom", "code": "X"})));
        }
        let (client, _, _) = test_client(transport);

        for status in [400u16, 404, 409, 422, 500, 503] {
            let err = client.get("/api/admin/users").await.unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.message(), "boom");
            assert!(matches!(err, AppError::Api(_)));
        }
    }

    #[tokio::test]
    async fn test_fallback_message_without_body() {
        let transport = MockTransport::new();
        transport.push(HttpResponse {
            status: 502,
            status_text: "Bad Gateway".into(),
            content_type: None,
            body: String::new(),
        });
        let (client, _, _) = test_client(transport);

        let err = client.get("/x").await.unwrap_err();
        assert_eq!(err.message(), "HTTP 502: Bad Gateway");
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let transport = MockTransport::new();
        transport.push(json_response(401, json!({"error": "Token expirado", "code": "TOKEN_EXPIRED"})));
        let (client, session, navigator) = test_client(transport);
        session.set_token("stale");

        let err = client.get("/api/admin/dashboard/stats").await.unwrap_err();

        assert!(err.is_auth());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.code(), AuthErrorCode::TokenExpired.code());
        assert_eq!(session.token(), None);
        assert_eq!(navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let transport = MockTransport::new();
        transport.push(json_response(403, json!({"error": "Prohibido"})));
        let (client, session, navigator) = test_client(transport);
        session.set_token("tok");

        let err = client.get("/x").await.unwrap_err();

        assert!(err.is_auth());
        assert_eq!(err.code(), AuthErrorCode::Forbidden.code());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let transport = MockTransport::new();
        transport.push_network_failure("connection refused");
        let (client, _, _) = test_client(transport);

        let err = client.get("/api/admin/users").await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(err.code(), NETWORK_ERROR);
        assert_eq!(err.status(), Some(0));
        assert!(!matches!(err, AppError::Api(_)));
    }
}
