use crate::domain::a001_users::BankAccount;
use crate::enums::{Tier, UserState};
use crate::shared::pagination::Pagination;
use serde::{Deserialize, Serialize};

/// Column the analytics listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Balance,
    RegisteredDate,
    Tier,
    TotalTasks,
    Earnings,
}

impl SortBy {
    pub fn code(&self) -> &'static str {
        match self {
            SortBy::Balance => "balance",
            SortBy::RegisteredDate => "registeredDate",
            SortBy::Tier => "tier",
            SortBy::TotalTasks => "totalTasks",
            SortBy::Earnings => "earnings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Balance => "Balance",
            SortBy::RegisteredDate => "Fecha de registro",
            SortBy::Tier => "Tier",
            SortBy::TotalTasks => "Tareas",
            SortBy::Earnings => "Ganancias",
        }
    }

    pub fn all() -> Vec<SortBy> {
        vec![
            SortBy::Balance,
            SortBy::RegisteredDate,
            SortBy::Tier,
            SortBy::TotalTasks,
            SortBy::Earnings,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Filters of `GET /api/admin/users/analytics`.
///
/// Unlike the list filters, every defined key is sent as-is (serialized
/// through `serde_qs`), in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAnalyticsFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_bank_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criminal_record_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_completed_tasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tasks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<UserState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,
}

impl PaymentAnalyticsFilters {
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }

    /// Same filters with `export=true` appended, for the CSV download.
    pub fn for_export(&self) -> Self {
        Self {
            export: Some(true),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPaymentData {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub state: String,
    #[serde(default)]
    pub tier: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks_count: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub verification_level: String,
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub criminal_record_verified: bool,
    #[serde(default)]
    pub address_verified: bool,
    #[serde(default)]
    pub available_balance: f64,
    #[serde(default)]
    pub pending_balance: f64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub total_withdrawn: f64,
    #[serde(default)]
    pub last_transaction_at: Option<String>,
    #[serde(default)]
    pub has_bank_account: bool,
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
}

/// Aggregates over the whole filtered population, not just the current page.
/// Percentages arrive preformatted as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentAnalyticsStatistics {
    pub total_users: u64,
    pub users_with_bank: u64,
    pub users_without_bank: u64,
    pub percent_with_bank: String,
    pub bronze_tier: u64,
    pub silver_tier: u64,
    pub gold_tier: u64,
    pub platinum_tier: u64,
    pub total_available_balance: f64,
    pub total_pending_balance: f64,
    pub total_earnings_sum: f64,
    pub avg_available_balance: f64,
    pub identity_verified_count: u64,
    pub criminal_record_verified_count: u64,
    pub address_verified_count: u64,
    pub percent_identity_verified: String,
}

impl PaymentAnalyticsStatistics {
    pub fn tier_count(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Bronze => self.bronze_tier,
            Tier::Silver => self.silver_tier,
            Tier::Gold => self.gold_tier,
            Tier::Platinum => self.platinum_tier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAnalytics {
    pub users: Vec<UserPaymentData>,
    #[serde(default)]
    pub statistics: PaymentAnalyticsStatistics,
    /// Absent when the server returns the whole population unpaginated
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub filters: PaymentAnalyticsFilters,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_undefined() {
        let filters = PaymentAnalyticsFilters {
            has_bank_account: Some(false),
            tier: Some(Tier::Gold),
            page: Some(2),
            limit: Some(50),
            sort_by: Some(SortBy::Balance),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string().unwrap(),
            "hasBankAccount=false&tier=GOLD&page=2&limit=50&sortBy=balance&sortOrder=DESC"
        );
        assert_eq!(PaymentAnalyticsFilters::default().to_query_string().unwrap(), "");
    }

    #[test]
    fn test_export_flag() {
        let filters = PaymentAnalyticsFilters {
            state: Some(UserState::Blocked),
            ..Default::default()
        };
        assert_eq!(
            filters.for_export().to_query_string().unwrap(),
            "state=BLOCKED&export=true"
        );
        assert_eq!(filters.export, None);
    }

    #[test]
    fn test_parse_unpaginated_response() {
        let json = r#"{
            "users": [],
            "statistics": {"totalUsers": 3, "percentWithBank": "66.7", "goldTier": 1},
            "pagination": null,
            "filters": {"hasBankAccount": true},
            "sortBy": "balance",
            "sortOrder": "DESC"
        }"#;
        let data: PaymentAnalytics = serde_json::from_str(json).unwrap();
        assert!(data.pagination.is_none());
        assert_eq!(data.statistics.tier_count(Tier::Gold), 1);
        assert_eq!(data.filters.has_bank_account, Some(true));
    }
}
