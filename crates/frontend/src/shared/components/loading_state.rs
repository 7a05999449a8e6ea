use leptos::prelude::*;

#[component]
pub fn LoadingState(
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="loading-state">
            <div class="loading-state__spinner"></div>
            <span>{message.unwrap_or_else(|| "Cargando...".to_string())}</span>
        </div>
    }
}
