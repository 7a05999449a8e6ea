use super::aggregate::{TicketCategory, TicketPriority, TicketStatus};
use crate::shared::query::{Choice, ListFilters, QueryParams};
use serde::{Deserialize, Serialize};

/// Filters of `GET /api/support/admin/tickets`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilters {
    pub status: Choice<TicketStatus>,
    pub category: Choice<TicketCategory>,
    pub priority: Choice<TicketPriority>,
    pub assigned_to: Option<i64>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListFilters for TicketFilters {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_choice("status", &self.status)
            .push_choice("category", &self.category)
            .push_choice("priority", &self.priority)
            .push_opt("assignedTo", self.assigned_to)
            .push_text("search", self.search.as_deref())
            .push_opt("page", self.page)
            .push_opt("limit", self.limit);
        q
    }
}

/// Body of `PATCH /api/support/admin/tickets/{id}`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

impl TicketUpdate {
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.assigned_to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketReply {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAssignment {
    pub staff_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_filters_skip_all() {
        let filters = TicketFilters {
            status: Choice::Only(TicketStatus::InProgress),
            category: Choice::All,
            priority: Choice::Only(TicketPriority::Urgent),
            search: Some("pago".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query().to_query_string(),
            "status=IN_PROGRESS&priority=URGENT&search=pago"
        );
    }

    #[test]
    fn test_ticket_update_serializes_only_set_fields() {
        let update = TicketUpdate::status(TicketStatus::Resolved);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"RESOLVED"}"#
        );
        assert!(TicketUpdate::default().is_empty());
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let json = r#"{"id":1,"userId":2,"userName":"Ana","subject":"s","category":"REFUND","priority":"LOW","status":"NEW","createdAt":"2024-01-01","updatedAt":"2024-01-01","messageCount":3}"#;
        let ticket: super::super::SupportTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.category, TicketCategory::Other);
        assert_eq!(ticket.response_count, Some(3));
    }
}
