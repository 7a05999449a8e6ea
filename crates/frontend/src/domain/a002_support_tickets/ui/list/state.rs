use contracts::domain::a002_support_tickets::{
    SupportTicket, TicketCategory, TicketFilters, TicketPriority, TicketStatus,
};
use contracts::shared::pagination::Pagination;
use contracts::shared::query::Choice;
use leptos::prelude::*;

use crate::shared::components::ui::badge::{ticket_priority_badge, ticket_status_badge, BadgeSpec};
use crate::shared::date_utils::format_datetime;
use crate::shared::load_state::LoadState;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug)]
pub struct TicketsListState {
    pub tickets: LoadState<Vec<SupportTicket>>,
    pub search: String,
    pub status: Choice<TicketStatus>,
    pub priority: Choice<TicketPriority>,
    pub category: Choice<TicketCategory>,
    pub page: u32,
    pub page_size: u32,
    /// Ticket shown in the detail modal
    pub selected: Option<i64>,
}

impl Default for TicketsListState {
    fn default() -> Self {
        Self {
            tickets: LoadState::Idle,
            search: String::new(),
            status: Choice::All,
            priority: Choice::All,
            category: Choice::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected: None,
        }
    }
}

/// One table row, already formatted
#[derive(Clone, Debug, PartialEq)]
pub struct TicketRow {
    pub id: i64,
    pub subject: String,
    pub user_name: String,
    pub category: &'static str,
    pub status: BadgeSpec,
    pub priority: BadgeSpec,
    pub responses: u32,
    pub updated_at: String,
}

impl From<&SupportTicket> for TicketRow {
    fn from(t: &SupportTicket) -> Self {
        Self {
            id: t.id,
            subject: t.subject.clone(),
            user_name: t.user_name.clone(),
            category: t.category.display_name(),
            status: ticket_status_badge(t.status),
            priority: ticket_priority_badge(t.priority),
            responses: t.response_count.unwrap_or(0),
            updated_at: format_datetime(&t.updated_at),
        }
    }
}

impl TicketsListState {
    /// Paging is applied locally, so no page/limit is sent.
    pub fn filters(&self) -> TicketFilters {
        TicketFilters {
            status: self.status,
            category: self.category,
            priority: self.priority,
            assigned_to: None,
            search: Some(self.search.clone()),
            page: None,
            limit: None,
        }
    }

    pub fn total(&self) -> u64 {
        self.tickets.ready().map(|t| t.len() as u64).unwrap_or(0)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_total(self.total(), self.page, self.page_size)
    }

    pub fn visible_rows(&self) -> Vec<TicketRow> {
        let Some(tickets) = self.tickets.ready() else {
            return Vec::new();
        };
        let range = self.pagination().slice_range(tickets.len());
        tickets[range].iter().map(TicketRow::from).collect()
    }

    /// Count of tickets per status in the loaded list
    pub fn count_by_status(&self, status: TicketStatus) -> usize {
        self.tickets
            .ready()
            .map(|t| t.iter().filter(|t| t.status == status).count())
            .unwrap_or(0)
    }
}

pub fn create_state() -> RwSignal<TicketsListState> {
    RwSignal::new(TicketsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_support_tickets::api::tests::ticket_json;
    use crate::domain::a002_support_tickets::api::{get_all_tickets, update_ticket};
    use crate::shared::api::testing::{test_client, MockTransport};
    use contracts::domain::a002_support_tickets::TicketUpdate;
    use contracts::shared::query::ListFilters;
    use serde_json::json;

    fn loaded(count: i64) -> TicketsListState {
        let tickets = (1..=count)
            .map(|id| serde_json::from_value(ticket_json(id, "OPEN")).unwrap())
            .collect();
        TicketsListState {
            tickets: LoadState::Ready(tickets),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_side_pages() {
        let mut state = loaded(45);
        state.page = 3;
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, 41);

        state.page = 9;
        assert_eq!(state.pagination().current_page, 3);
        assert_eq!(state.visible_rows().len(), 5);
    }

    #[test]
    fn test_filters_skip_paging() {
        let state = TicketsListState {
            status: Choice::Only(TicketStatus::New),
            ..Default::default()
        };
        assert_eq!(state.filters().to_query().to_query_string(), "status=NEW");
    }

    #[tokio::test]
    async fn test_resolved_ticket_badge_after_reload() {
        let transport = MockTransport::new();
        transport.push_json(200, ticket_json(42, "RESOLVED"));
        transport.push_json(200, json!([ticket_json(41, "OPEN"), ticket_json(42, "RESOLVED")]));
        let (client, _, _) = test_client(transport);

        update_ticket(&client, 42, &TicketUpdate::status(TicketStatus::Resolved))
            .await
            .unwrap();
        let mut state = TicketsListState::default();
        state.tickets = LoadState::from_result(get_all_tickets(&client, &state.filters()).await);

        let row = state.visible_rows().into_iter().find(|r| r.id == 42).unwrap();
        assert_eq!(row.status.label, "Resuelto");
        assert_eq!(state.count_by_status(TicketStatus::Resolved), 1);
    }
}
