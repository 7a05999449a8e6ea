use crate::shared::query::QueryValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    New,
    Open,
    InProgress,
    PendingCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::New => "NEW",
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::PendingCustomer => "PENDING_CUSTOMER",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::New => "Nuevo",
            TicketStatus::Open => "Abierto",
            TicketStatus::InProgress => "En Progreso",
            TicketStatus::PendingCustomer => "Esperando Cliente",
            TicketStatus::Resolved => "Resuelto",
            TicketStatus::Closed => "Cerrado",
        }
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::New,
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::PendingCustomer,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Resolved and closed tickets need no further staff action
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl QueryValue for TicketStatus {
    fn code(&self) -> &'static str {
        TicketStatus::code(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
            TicketPriority::Urgent => "URGENT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Baja",
            TicketPriority::Medium => "Media",
            TicketPriority::High => "Alta",
            TicketPriority::Urgent => "Urgente",
        }
    }

    pub fn all() -> Vec<TicketPriority> {
        vec![
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
            TicketPriority::Urgent,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

impl QueryValue for TicketPriority {
    fn code(&self) -> &'static str {
        TicketPriority::code(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Technical,
    Billing,
    General,
    Verification,
    Complaint,
    #[serde(other)]
    Other,
}

impl TicketCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "TECHNICAL",
            TicketCategory::Billing => "BILLING",
            TicketCategory::General => "GENERAL",
            TicketCategory::Verification => "VERIFICATION",
            TicketCategory::Complaint => "COMPLAINT",
            TicketCategory::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "Técnico",
            TicketCategory::Billing => "Facturación",
            TicketCategory::General => "General",
            TicketCategory::Verification => "Verificación",
            TicketCategory::Complaint => "Reclamo",
            TicketCategory::Other => "Otro",
        }
    }

    pub fn all() -> Vec<TicketCategory> {
        vec![
            TicketCategory::Technical,
            TicketCategory::Billing,
            TicketCategory::General,
            TicketCategory::Verification,
            TicketCategory::Complaint,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl QueryValue for TicketCategory {
    fn code(&self) -> &'static str {
        TicketCategory::code(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, alias = "messageCount")]
    pub response_count: Option<u32>,
    #[serde(default, alias = "lastMessageAt")]
    pub last_response_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: i64,
    pub ticket_id: i64,
    #[serde(default)]
    pub from_user_id: Option<i64>,
    #[serde(default)]
    pub from_staff_id: Option<i64>,
    #[serde(alias = "senderName")]
    pub from_user_name: String,
    #[serde(alias = "content")]
    pub message: String,
    #[serde(default)]
    pub is_from_customer: bool,
    #[serde(default)]
    pub is_from_staff: bool,
    pub created_at: String,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
}
