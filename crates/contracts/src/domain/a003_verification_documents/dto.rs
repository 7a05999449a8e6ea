use super::aggregate::{DocumentStatus, DocumentType};
use crate::shared::query::{Choice, ListFilters, QueryParams};
use serde::{Deserialize, Serialize};

/// Filters of `GET /api/verification/admin/documents`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilters {
    pub status: Choice<DocumentStatus>,
    pub document_type: Choice<DocumentType>,
    pub search: Option<String>,
}

impl DocumentFilters {
    /// Review queue default: pending documents of any type
    pub fn pending() -> Self {
        Self {
            status: Choice::Only(DocumentStatus::Pending),
            ..Default::default()
        }
    }
}

impl ListFilters for DocumentFilters {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_choice("status", &self.status)
            .push_choice("type", &self.document_type)
            .push_text("search", self.search.as_deref());
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRejection {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_filters() {
        let filters = DocumentFilters {
            document_type: Choice::Only(DocumentType::CriminalRecord),
            ..DocumentFilters::pending()
        };
        assert_eq!(
            filters.to_query().to_query_string(),
            "status=PENDING&type=CRIMINAL_RECORD"
        );
        assert!(DocumentFilters::default().to_query().is_empty());
    }
}
