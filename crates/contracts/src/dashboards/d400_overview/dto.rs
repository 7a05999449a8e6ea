use serde::{Deserialize, Serialize};

/// Response of `GET /api/admin/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_tasks: u64,
    pub total_revenue: f64,
    pub pending_verifications: u64,
    pub open_tickets: u64,
    pub recent_activity: Vec<ActivityItem>,
    pub trends: Trends,
}

/// Percent change against the previous period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trends {
    pub users: f64,
    pub tasks: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserRegistered,
    TaskCreated,
    VerificationPending,
    TicketCreated,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Icon name rendered next to the feed entry
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::UserRegistered => "user-plus",
            ActivityKind::TaskCreated => "clipboard",
            ActivityKind::VerificationPending => "shield",
            ActivityKind::TicketCreated => "message",
            ActivityKind::Other => "activity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// `+12.5%` / `-3.0%`, with one decimal.
pub fn format_trend(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}
