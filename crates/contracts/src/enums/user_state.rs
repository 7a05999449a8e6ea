use crate::shared::query::QueryValue;
use serde::{Deserialize, Serialize};

/// Account state of a marketplace user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    Ok,
    Blocked,
    Disabled,
    IncompleteRegistration,
}

impl UserState {
    pub fn code(&self) -> &'static str {
        match self {
            UserState::Ok => "OK",
            UserState::Blocked => "BLOCKED",
            UserState::Disabled => "DISABLED",
            UserState::IncompleteRegistration => "INCOMPLETE_REGISTRATION",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserState::Ok => "Activo",
            UserState::Blocked => "Bloqueado",
            UserState::Disabled => "Deshabilitado",
            UserState::IncompleteRegistration => "Registro incompleto",
        }
    }

    /// States an administrator can set through the status endpoint
    pub fn assignable() -> Vec<UserState> {
        vec![UserState::Ok, UserState::Blocked, UserState::Disabled]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "OK" => Some(UserState::Ok),
            "BLOCKED" => Some(UserState::Blocked),
            "DISABLED" => Some(UserState::Disabled),
            "INCOMPLETE_REGISTRATION" => Some(UserState::IncompleteRegistration),
            _ => None,
        }
    }
}

impl QueryValue for UserState {
    fn code(&self) -> &'static str {
        UserState::code(self)
    }
}
