//! Verification tab - documents uploaded by the user

use leptos::prelude::*;
use leptos_router::components::A;

use super::super::view_model::UserDetailsVm;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::ui::badge::{document_status_badge, SpecBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;

#[component]
pub fn VerificationTab(vm: UserDetailsVm) -> impl IntoView {
    move || match vm.documents.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
        LoadState::Failed { message, recoverable } => view! {
            <ErrorState
                message=message
                on_retry=recoverable.then(|| Callback::new(move |_| vm.load_documents()))
            />
        }
        .into_any(),
        LoadState::Ready(docs) if docs.is_empty() => {
            view! { <div class="empty-state">"El usuario no ha subido documentos"</div> }.into_any()
        }
        LoadState::Ready(docs) => view! {
            <div class="document-list">
                {docs.into_iter().map(|doc| {
                    let pending = doc.is_reviewable();
                    view! {
                        <div class="document-list__item">
                            <div class="document-list__info">
                                <strong>{doc.document_type.display_name()}</strong>
                                <span class="text-muted">{format_datetime(&doc.created_at)}</span>
                                {doc.rejection_reason.clone().map(|r| view! {
                                    <span class="document-list__reason">{format!("Motivo: {}", r)}</span>
                                })}
                            </div>
                            <SpecBadge spec=document_status_badge(doc.status) />
                            <a class="button button--small" href=doc.file_url.clone() target="_blank" rel="noopener">
                                {icon("eye")}" Ver"
                            </a>
                            <Show when=move || pending>
                                <A href="/verification" attr:class="button button--small button--primary">
                                    "Revisar"
                                </A>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
        .into_any(),
    }
}
