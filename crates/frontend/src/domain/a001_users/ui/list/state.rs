use contracts::domain::a001_users::{
    PendingPayoutsResponse, UserFilters, UserStatusUpdate, UsersPage, DEFAULT_MIN_PAYOUT_BALANCE,
};
use contracts::enums::UserState;
use contracts::shared::query::Choice;
use leptos::prelude::*;

use crate::shared::load_state::LoadState;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub users: LoadState<UsersPage>,
    pub search: String,
    pub status: Choice<UserState>,
    pub verified: Option<bool>,
    pub page: u32,
    pub page_size: u32,
    // Pending payouts tab
    pub payouts: LoadState<PendingPayoutsResponse>,
    pub min_balance: f64,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            users: LoadState::Idle,
            search: String::new(),
            status: Choice::All,
            verified: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            payouts: LoadState::Idle,
            min_balance: DEFAULT_MIN_PAYOUT_BALANCE,
        }
    }
}

impl UsersListState {
    pub fn filters(&self) -> UserFilters {
        UserFilters {
            status: self.status,
            page: Some(self.page),
            limit: Some(self.page_size),
            search: Some(self.search.clone()),
            verified: self.verified,
        }
    }
}

/// Status change awaiting confirmation
#[derive(Clone, Debug, PartialEq)]
pub struct StatusChangeDraft {
    pub user_id: i64,
    pub user_name: String,
    pub target: UserState,
}

impl StatusChangeDraft {
    /// Restoring access needs no justification; removing it does.
    pub fn reason_required(&self) -> bool {
        self.target != UserState::Ok
    }

    pub fn title(&self) -> String {
        format!("{} usuario", action_label(self.target))
    }

    pub fn message(&self) -> String {
        format!(
            "El usuario {} pasará al estado \"{}\".",
            self.user_name,
            self.target.display_name()
        )
    }

    pub fn to_update(&self, reason: &str) -> UserStatusUpdate {
        let reason = reason.trim();
        UserStatusUpdate {
            status: self.target,
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        }
    }
}

pub fn action_label(target: UserState) -> &'static str {
    match target {
        UserState::Ok => "Activar",
        UserState::Blocked => "Bloquear",
        UserState::Disabled => "Deshabilitar",
        UserState::IncompleteRegistration => "Marcar incompleto",
    }
}

/// States an administrator can move a user to from `current`
pub fn status_actions(current: UserState) -> Vec<UserState> {
    match current {
        UserState::Ok => vec![UserState::Blocked, UserState::Disabled],
        UserState::Blocked => vec![UserState::Ok, UserState::Disabled],
        UserState::Disabled => vec![UserState::Ok],
        UserState::IncompleteRegistration => vec![UserState::Disabled],
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::ListFilters;

    #[test]
    fn test_default_filters_send_only_paging() {
        let state = UsersListState::default();
        assert_eq!(state.filters().to_query().to_query_string(), "page=1&limit=20");
    }

    #[test]
    fn test_reason_trimmed_and_optional() {
        let draft = StatusChangeDraft {
            user_id: 4,
            user_name: "Ana".to_string(),
            target: UserState::Ok,
        };
        assert!(!draft.reason_required());
        assert_eq!(draft.to_update("   ").reason, None);

        let block = StatusChangeDraft {
            target: UserState::Blocked,
            ..draft
        };
        assert!(block.reason_required());
        assert_eq!(block.to_update(" spam ").reason.as_deref(), Some("spam"));
        assert_eq!(block.title(), "Bloquear usuario");
    }

    #[test]
    fn test_actions_never_offer_current_state() {
        for state in [
            UserState::Ok,
            UserState::Blocked,
            UserState::Disabled,
            UserState::IncompleteRegistration,
        ] {
            assert!(!status_actions(state).contains(&state));
        }
    }
}
