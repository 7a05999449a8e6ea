use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline failure panel with an optional "Reintentar" button
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
    /// Rendered only when set
    #[prop(optional_no_strip)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="alert alert--error error-state">
            <div class="error-state__icon">{icon("alert")}</div>
            <div class="error-state__message">{message}</div>
            {on_retry.map(|retry| view! {
                <button class="button button--secondary" on:click=move |_| retry.run(())>
                    {icon("refresh")}
                    " Reintentar"
                </button>
            })}
        </div>
    }
}
