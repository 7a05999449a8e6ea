//! ViewModel for the user details page

use contracts::domain::a001_users::{
    AdminUser, TaskProgress, TaskRole, UserActivityQuery, UserActivityResponse, UserTasksData,
    UserTasksQuery,
};
use contracts::domain::a003_verification_documents::{DocumentFilters, VerificationDocument};
use contracts::domain::a004_transactions::Transaction;
use contracts::shared::query::Choice;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_users::api::{get_user_activity, get_user_details, get_user_tasks};
use crate::domain::a003_verification_documents::api::get_all_documents;
use crate::domain::a004_transactions::api::get_user_transactions;
use crate::shared::api::ApiClient;
use crate::shared::load_state::LoadState;
use crate::shared::request_seq::RequestSequence;

pub const TASKS_PAGE_SIZE: u32 = 20;
pub const ACTIVITY_LIMIT: u32 = 50;
pub const ACTIVITY_PERIODS: [u32; 3] = [7, 30, 90];

#[derive(Clone, Copy)]
pub struct UserDetailsVm {
    client: StoredValue<ApiClient>,
    seq: StoredValue<RequestSequence>,

    pub user_id: RwSignal<Option<i64>>,
    pub user: RwSignal<LoadState<AdminUser>>,

    pub tasks: RwSignal<LoadState<UserTasksData>>,
    pub task_role: RwSignal<Choice<TaskRole>>,
    pub task_status: RwSignal<Choice<TaskProgress>>,

    pub activity: RwSignal<LoadState<UserActivityResponse>>,
    pub activity_days: RwSignal<u32>,

    pub transactions: RwSignal<LoadState<Vec<Transaction>>>,
    pub documents: RwSignal<LoadState<Vec<VerificationDocument>>>,

    pub active_tab: RwSignal<&'static str>,
}

impl UserDetailsVm {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: StoredValue::new(client),
            seq: StoredValue::new(RequestSequence::new()),
            user_id: RwSignal::new(None),
            user: RwSignal::new(LoadState::Idle),
            tasks: RwSignal::new(LoadState::Idle),
            task_role: RwSignal::new(Choice::All),
            task_status: RwSignal::new(Choice::All),
            activity: RwSignal::new(LoadState::Idle),
            activity_days: RwSignal::new(30),
            transactions: RwSignal::new(LoadState::Idle),
            documents: RwSignal::new(LoadState::Idle),
            active_tab: RwSignal::new("info"),
        }
    }

    pub fn display_name(&self) -> Signal<String> {
        let user = self.user;
        Signal::derive(move || {
            user.with(|u| u.ready().map(|u| u.name.clone()))
                .unwrap_or_else(|| "Usuario".to_string())
        })
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    /// Loads the profile and resets every tab, so switching between users
    /// never shows another user's data.
    pub fn load(&self, id: i64) {
        let vm = *self;
        let ticket = vm.seq.with_value(|s| s.issue());
        vm.user_id.set(Some(id));
        vm.user.set(LoadState::Loading);
        vm.tasks.set(LoadState::Idle);
        vm.activity.set(LoadState::Idle);
        vm.transactions.set(LoadState::Idle);
        vm.documents.set(LoadState::Idle);

        let client = vm.client.get_value();
        spawn_local(async move {
            let result = get_user_details(&client, id).await;
            if ticket.is_current() {
                vm.user.set(LoadState::from_result(result));
            }
        });
    }

    pub fn reload(&self) {
        if let Some(id) = self.user_id.get_untracked() {
            self.load(id);
        }
    }

    /// `false` once another user was opened or the page was unmounted
    pub fn is_showing(&self, id: i64) -> bool {
        self.user_id.try_get_untracked() == Some(Some(id))
    }

    pub fn load_tasks(&self) {
        let Some(id) = self.user_id.get_untracked() else {
            return;
        };
        let vm = *self;
        let query = UserTasksQuery {
            limit: Some(TASKS_PAGE_SIZE),
            offset: None,
            role: vm.task_role.get_untracked(),
            status: vm.task_status.get_untracked(),
        };
        vm.tasks.set(LoadState::Loading);
        let client = vm.client.get_value();
        spawn_local(async move {
            let result = get_user_tasks(&client, id, &query).await.map(|r| r.data);
            if vm.is_showing(id) {
                vm.tasks.set(LoadState::from_result(result));
            }
        });
    }

    pub fn load_activity(&self) {
        let Some(id) = self.user_id.get_untracked() else {
            return;
        };
        let vm = *self;
        let query = UserActivityQuery {
            limit: Some(ACTIVITY_LIMIT),
            days: Some(vm.activity_days.get_untracked()),
        };
        vm.activity.set(LoadState::Loading);
        let client = vm.client.get_value();
        spawn_local(async move {
            let result = get_user_activity(&client, id, &query).await;
            if vm.is_showing(id) {
                vm.activity.set(LoadState::from_result(result));
            }
        });
    }

    pub fn load_transactions(&self) {
        let Some(id) = self.user_id.get_untracked() else {
            return;
        };
        let vm = *self;
        vm.transactions.set(LoadState::Loading);
        let client = vm.client.get_value();
        spawn_local(async move {
            let result = get_user_transactions(&client, id, None).await;
            if vm.is_showing(id) {
                vm.transactions.set(LoadState::from_result(result));
            }
        });
    }

    /// The documents endpoint has no user filter; search by email and keep
    /// only this user's documents.
    pub fn load_documents(&self) {
        let Some(id) = self.user_id.get_untracked() else {
            return;
        };
        let vm = *self;
        let email = vm.user.with_untracked(|u| u.ready().map(|u| u.email.clone()));
        let filters = DocumentFilters {
            search: email,
            ..Default::default()
        };
        vm.documents.set(LoadState::Loading);
        let client = vm.client.get_value();
        spawn_local(async move {
            let result = get_all_documents(&client, &filters)
                .await
                .map(|docs| docs.into_iter().filter(|d| d.user_id == id).collect());
            if vm.is_showing(id) {
                vm.documents.set(LoadState::from_result(result));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{test_client, MockTransport};

    #[test]
    fn test_is_showing_tracks_open_user() {
        let owner = Owner::new();
        let vm = owner.with(|| {
            let (client, _, _) = test_client(MockTransport::new());
            UserDetailsVm::new(client)
        });

        vm.user_id.set(Some(7));
        assert!(vm.is_showing(7));
        vm.user_id.set(Some(8));
        assert!(!vm.is_showing(7));

        owner.cleanup();
        assert!(!vm.is_showing(8));
    }
}
