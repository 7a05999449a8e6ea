use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    config.log_summary();

    // One client for the whole app; it owns the session
    provide_context(ApiClient::browser(config));
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
