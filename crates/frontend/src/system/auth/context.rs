use contracts::system::auth::{LoginUser, StaffCheckResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<LoginUser>,
    pub staff: Option<StaffCheckResponse>,
}

/// Client shared by every page
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let client = use_api();
    let auth_state = RwSignal::new(AuthState {
        is_authenticated: api::is_authenticated(&client),
        ..Default::default()
    });

    // Restore the staff role of a session left in localStorage
    Effect::new(move |_| {
        if !auth_state.with_untracked(|s| s.is_authenticated) {
            return;
        }
        let client = client.clone();
        spawn_local(async move {
            match api::check_staff_status(&client).await {
                Ok(staff) if staff.is_staff => {
                    auth_state.update(|s| s.staff = Some(staff));
                }
                Ok(_) => {
                    api::logout(&client);
                    auth_state.set(AuthState::default());
                }
                Err(e) if e.is_auth() => {
                    api::logout(&client);
                    auth_state.set(AuthState::default());
                }
                Err(_) => {}
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Handler that clears the session and the auth state
pub fn do_logout() -> Callback<()> {
    let client = StoredValue::new(use_api());
    let auth_state = use_auth();
    Callback::new(move |_| {
        client.with_value(|c| api::logout(c));
        auth_state.set(AuthState::default());
    })
}
