use super::aggregate::{AdminUser, PendingPayoutUser, UserActivity, UserTask, UserTaskStats};
use crate::enums::UserState;
use crate::shared::pagination::Pagination;
use crate::shared::query::{Choice, ListFilters, QueryParams, QueryValue};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PAYOUT_BALANCE: f64 = 1000.0;

/// Filters of `GET /api/admin/users`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub status: Choice<UserState>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub verified: Option<bool>,
}

impl ListFilters for UserFilters {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_choice("status", &self.status)
            .push_opt("page", self.page)
            .push_opt("limit", self.limit)
            .push_text("search", self.search.as_deref())
            .push_opt("verified", self.verified);
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<AdminUser>,
    pub pagination: Pagination,
}

/// Body of `PATCH /api/admin/users/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    pub status: UserState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayoutFilters {
    pub min_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingPayoutsResponse {
    pub success: bool,
    pub data: Vec<PendingPayoutUser>,
    pub count: u32,
    pub filters: PendingPayoutFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskRole {
    Client,
    Worker,
}

impl TaskRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskRole::Client => "Como cliente",
            TaskRole::Worker => "Como trabajador",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "client" => Some(TaskRole::Client),
            "worker" => Some(TaskRole::Worker),
            _ => None,
        }
    }
}

impl QueryValue for TaskRole {
    fn code(&self) -> &'static str {
        match self {
            TaskRole::Client => "client",
            TaskRole::Worker => "worker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskProgress {
    Completed,
    Active,
    Cancelled,
}

impl TaskProgress {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskProgress::Completed => "Completadas",
            TaskProgress::Active => "Activas",
            TaskProgress::Cancelled => "Canceladas",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(TaskProgress::Completed),
            "active" => Some(TaskProgress::Active),
            "cancelled" => Some(TaskProgress::Cancelled),
            _ => None,
        }
    }
}

impl QueryValue for TaskProgress {
    fn code(&self) -> &'static str {
        match self {
            TaskProgress::Completed => "completed",
            TaskProgress::Active => "active",
            TaskProgress::Cancelled => "cancelled",
        }
    }
}

/// Filters of `GET /api/admin/users/{id}/tasks`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTasksQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub role: Choice<TaskRole>,
    pub status: Choice<TaskProgress>,
}

impl ListFilters for UserTasksQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("limit", self.limit)
            .push_opt("offset", self.offset.filter(|o| *o > 0))
            .push_choice("role", &self.role)
            .push_choice("status", &self.status);
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTasksData {
    pub as_client: Vec<UserTask>,
    pub as_worker: Vec<UserTask>,
    pub stats: UserTaskStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTasksResponse {
    pub success: bool,
    pub data: UserTasksData,
}

/// Filters of `GET /api/admin/users/{id}/activity`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserActivityQuery {
    pub limit: Option<u32>,
    pub days: Option<u32>,
}

impl ListFilters for UserActivityQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("limit", self.limit).push_opt("days", self.days);
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPeriod {
    pub from: String,
    pub to: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityResponse {
    pub success: bool,
    pub data: Vec<UserActivity>,
    pub period: ActivityPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_filters_blocked_first_page() {
        let filters = UserFilters {
            status: Choice::Only(UserState::Blocked),
            page: Some(1),
            limit: Some(20),
            ..Default::default()
        };
        let query = filters.to_query().to_query_string();
        assert_eq!(query, "status=BLOCKED&page=1&limit=20");
        assert!(!query.contains("search"));
        assert!(!query.contains("verified"));
    }

    #[test]
    fn test_user_filters_defaults_send_nothing() {
        let filters = UserFilters {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn test_user_filters_all_keys() {
        let filters = UserFilters {
            status: Choice::Only(UserState::Ok),
            page: Some(3),
            limit: Some(50),
            search: Some("perez".to_string()),
            verified: Some(false),
        };
        assert_eq!(
            filters.to_query().keys(),
            vec!["status", "page", "limit", "search", "verified"]
        );
        assert_eq!(filters.to_query().get("verified"), Some("false"));
    }

    #[test]
    fn test_status_update_body() {
        let body = UserStatusUpdate {
            status: UserState::Blocked,
            reason: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"BLOCKED"}"#
        );
    }

    #[test]
    fn test_tasks_query_skips_all_and_zero_offset() {
        let q = UserTasksQuery {
            limit: Some(20),
            offset: Some(0),
            role: Choice::Only(TaskRole::Worker),
            status: Choice::All,
        };
        assert_eq!(q.to_query().to_query_string(), "limit=20&role=worker");
    }
}
