use contracts::domain::a003_verification_documents::{
    DocumentFilters, DocumentStatus, DocumentType, VerificationDocument,
};
use contracts::shared::query::Choice;
use leptos::prelude::*;

use crate::shared::load_state::LoadState;

#[derive(Clone, Debug)]
pub struct VerificationListState {
    pub documents: LoadState<Vec<VerificationDocument>>,
    pub status: Choice<DocumentStatus>,
    pub document_type: Choice<DocumentType>,
    pub search: String,
    /// Document open in the preview modal
    pub preview: Option<i64>,
}

impl Default for VerificationListState {
    fn default() -> Self {
        let pending = DocumentFilters::pending();
        Self {
            documents: LoadState::Idle,
            status: pending.status,
            document_type: pending.document_type,
            search: String::new(),
            preview: None,
        }
    }
}

impl VerificationListState {
    pub fn filters(&self) -> DocumentFilters {
        DocumentFilters {
            status: self.status,
            document_type: self.document_type,
            search: Some(self.search.clone()),
        }
    }

    pub fn find(&self, id: i64) -> Option<VerificationDocument> {
        self.documents
            .ready()
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned())
    }
}

/// Review decision awaiting confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewAction {
    Approve(i64),
    Reject(i64),
}

impl ReviewAction {
    pub fn document_id(&self) -> i64 {
        match self {
            ReviewAction::Approve(id) | ReviewAction::Reject(id) => *id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReviewAction::Approve(_) => "Aprobar documento",
            ReviewAction::Reject(_) => "Rechazar documento",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            ReviewAction::Approve(_) => "Aprobar",
            ReviewAction::Reject(_) => "Rechazar",
        }
    }

    pub fn needs_reason(&self) -> bool {
        matches!(self, ReviewAction::Reject(_))
    }
}

pub fn create_state() -> RwSignal<VerificationListState> {
    RwSignal::new(VerificationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::ListFilters;

    #[test]
    fn test_defaults_to_review_queue() {
        let state = VerificationListState::default();
        assert_eq!(state.filters().to_query().to_query_string(), "status=PENDING");
    }

    #[test]
    fn test_reject_needs_reason() {
        assert!(ReviewAction::Reject(3).needs_reason());
        assert!(!ReviewAction::Approve(3).needs_reason());
        assert_eq!(ReviewAction::Reject(3).document_id(), 3);
    }
}
