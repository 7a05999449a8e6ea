use crate::shared::query::QueryValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Identity,
    Address,
    CriminalRecord,
    Other,
}

impl DocumentType {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Identity => "IDENTITY",
            DocumentType::Address => "ADDRESS",
            DocumentType::CriminalRecord => "CRIMINAL_RECORD",
            DocumentType::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Identity => "Cédula de identidad",
            DocumentType::Address => "Comprobante de domicilio",
            DocumentType::CriminalRecord => "Antecedentes penales",
            DocumentType::Other => "Otro",
        }
    }

    pub fn all() -> Vec<DocumentType> {
        vec![
            DocumentType::Identity,
            DocumentType::Address,
            DocumentType::CriminalRecord,
            DocumentType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl QueryValue for DocumentType {
    fn code(&self) -> &'static str {
        DocumentType::code(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "PENDING",
            DocumentStatus::Approved => "APPROVED",
            DocumentStatus::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pendiente",
            DocumentStatus::Approved => "Aprobado",
            DocumentStatus::Rejected => "Rechazado",
        }
    }

    pub fn all() -> Vec<DocumentStatus> {
        vec![
            DocumentStatus::Pending,
            DocumentStatus::Approved,
            DocumentStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl QueryValue for DocumentStatus {
    fn code(&self) -> &'static str {
        DocumentStatus::code(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDocument {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub file_url: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl VerificationDocument {
    /// Only pending documents can be approved or rejected
    pub fn is_reviewable(&self) -> bool {
        self.status == DocumentStatus::Pending
    }

    pub fn is_pdf(&self) -> bool {
        self.file_url
            .split('?')
            .next()
            .map(|path| path.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false)
    }
}
