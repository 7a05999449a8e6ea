use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationLevel {
    Basic,
    Verified,
    Premium,
}

impl VerificationLevel {
    pub fn code(&self) -> &'static str {
        match self {
            VerificationLevel::Basic => "BASIC",
            VerificationLevel::Verified => "VERIFIED",
            VerificationLevel::Premium => "PREMIUM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VerificationLevel::Basic => "Básico",
            VerificationLevel::Verified => "Verificado",
            VerificationLevel::Premium => "Premium",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BASIC" => Some(VerificationLevel::Basic),
            "VERIFIED" => Some(VerificationLevel::Verified),
            "PREMIUM" => Some(VerificationLevel::Premium),
            _ => None,
        }
    }
}
