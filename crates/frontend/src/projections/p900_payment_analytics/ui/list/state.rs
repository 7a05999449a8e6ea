use contracts::enums::{Tier, UserState};
use contracts::projections::p900_payment_analytics::{
    PaymentAnalytics, PaymentAnalyticsFilters, SortBy, SortOrder, UserPaymentData,
};
use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

use crate::shared::load_state::LoadState;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug)]
pub struct PaymentAnalyticsState {
    pub data: LoadState<PaymentAnalytics>,
    pub has_bank_account: Option<bool>,
    pub tier: Option<Tier>,
    pub user_state: Option<UserState>,
    pub identity_verified: Option<bool>,
    pub min_balance: Option<f64>,
    pub max_balance: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaymentAnalyticsState {
    fn default() -> Self {
        Self {
            data: LoadState::Idle,
            has_bank_account: None,
            tier: None,
            user_state: None,
            identity_verified: None,
            min_balance: None,
            max_balance: None,
            sort_by: SortBy::Balance,
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaymentAnalyticsState {
    pub fn filters(&self) -> PaymentAnalyticsFilters {
        PaymentAnalyticsFilters {
            has_bank_account: self.has_bank_account,
            min_balance: self.min_balance,
            max_balance: self.max_balance,
            tier: self.tier,
            identity_verified: self.identity_verified,
            state: self.user_state,
            page: Some(self.page),
            limit: Some(self.page_size),
            sort_by: Some(self.sort_by),
            sort_order: Some(self.sort_order),
            ..Default::default()
        }
    }

    /// Clicking the active column flips the order; a new column starts descending.
    pub fn toggle_sort(&mut self, column: SortBy) {
        if self.sort_by == column {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = column;
            self.sort_order = SortOrder::Desc;
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        *self = Self {
            data: std::mem::take(&mut self.data),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page_size: self.page_size,
            ..Self::default()
        };
    }

    /// Server descriptor when sent, otherwise one computed over the whole population
    pub fn pagination(&self) -> Pagination {
        match self.data.ready() {
            Some(PaymentAnalytics {
                pagination: Some(p), ..
            }) => *p,
            Some(data) => Pagination::from_total(data.users.len() as u64, self.page, self.page_size),
            None => Pagination::default(),
        }
    }

    pub fn visible_users(&self) -> Vec<UserPaymentData> {
        match self.data.ready() {
            Some(data) if data.pagination.is_some() => data.users.clone(),
            Some(data) => data.users[self.pagination().slice_range(data.users.len())].to_vec(),
            None => Vec::new(),
        }
    }
}

/// `"true"`/`"false"` from a select, anything else means no filter
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Blank or non-numeric input clears the bound; negative values clamp to zero.
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
}

pub fn create_state() -> RwSignal<PaymentAnalyticsState> {
    RwSignal::new(PaymentAnalyticsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> UserPaymentData {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Usuario {}", id),
            "email": format!("u{}@pololitos.cl", id),
            "state": "OK",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn unpaginated(count: i64) -> PaymentAnalytics {
        PaymentAnalytics {
            users: (1..=count).map(user).collect(),
            statistics: Default::default(),
            pagination: None,
            filters: Default::default(),
            sort_by: None,
            sort_order: None,
        }
    }

    #[test]
    fn test_filters_carry_sort_and_page() {
        let state = PaymentAnalyticsState {
            tier: Some(Tier::Silver),
            has_bank_account: Some(false),
            ..Default::default()
        };
        assert_eq!(
            state.filters().to_query_string().unwrap(),
            "hasBankAccount=false&tier=SILVER&page=1&limit=20&sortBy=balance&sortOrder=DESC"
        );
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = PaymentAnalyticsState {
            page: 4,
            ..Default::default()
        };
        state.toggle_sort(SortBy::Balance);
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert_eq!(state.page, 1);

        state.toggle_sort(SortBy::Earnings);
        assert_eq!(state.sort_by, SortBy::Earnings);
        assert_eq!(state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_unpaginated_response_is_paged_locally() {
        let state = PaymentAnalyticsState {
            data: LoadState::Ready(unpaginated(45)),
            page: 3,
            ..Default::default()
        };
        let pagination = state.pagination();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_count, 45);
        let visible = state.visible_users();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, 41);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut state = PaymentAnalyticsState {
            tier: Some(Tier::Gold),
            min_balance: Some(5000.0),
            page: 2,
            ..Default::default()
        };
        state.toggle_sort(SortBy::Tier);
        state.clear_filters();
        assert_eq!(state.tier, None);
        assert_eq!(state.min_balance, None);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_by, SortBy::Tier);
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_amount(" 1500 "), Some(1500.0));
        assert_eq!(parse_amount("-3"), Some(0.0));
        assert_eq!(parse_amount("abc"), None);
    }
}
