pub mod state;

use contracts::domain::a003_verification_documents::{
    DocumentStatus, DocumentType, VerificationDocument,
};
use contracts::shared::query::Choice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableHeader, TableHeaderCell,
    TableRow,
};

use self::state::{create_state, ReviewAction};
use crate::domain::a003_verification_documents::api::{
    approve_document, get_all_documents, reject_document,
};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::ui::badge::{document_status_badge, Badge, BadgeVariant, SpecBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::load_state::{failure_message, LoadState};
use crate::shared::modal::{ConfirmModal, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

#[component]
fn DocumentPreview(
    document: VerificationDocument,
    on_close: Callback<()>,
    on_review: Callback<ReviewAction>,
) -> impl IntoView {
    let id = document.id;
    let reviewable = document.is_reviewable();
    let url = document.file_url.clone();

    view! {
        <Modal
            title=format!("{} de {}", document.document_type.display_name(), document.user_name)
            on_close=on_close
            wide=true
            footer=move || view! {
                <Show when=move || reviewable>
                    <button class="button button--danger" on:click=move |_| on_review.run(ReviewAction::Reject(id))>
                        {icon("x")}" Rechazar"
                    </button>
                    <button class="button button--primary" on:click=move |_| on_review.run(ReviewAction::Approve(id))>
                        {icon("check")}" Aprobar"
                    </button>
                </Show>
            }
        >
            <div class="document-preview__meta">
                <SpecBadge spec=document_status_badge(document.status) />
                <span>{document.user_email.clone().unwrap_or_default()}</span>
                <span class="text-muted">{format!("Subido {}", format_datetime(&document.created_at))}</span>
            </div>
            {document.rejection_reason.clone().map(|r| view! {
                <div class="alert alert--error">{format!("Motivo de rechazo: {}", r)}</div>
            })}
            {if document.is_pdf() {
                view! { <iframe class="document-preview__frame" src=url.clone() title="Documento"></iframe> }.into_any()
            } else {
                view! { <img class="document-preview__image" src=url.clone() alt="Documento" /> }.into_any()
            }}
            <a href=url target="_blank" rel="noopener" class="button button--secondary">
                {icon("eye")}" Abrir en otra pestaña"
            </a>
        </Modal>
    }
}

#[component]
pub fn VerificationList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let seq = StoredValue::new(RequestSequence::new());
    let search_input = RwSignal::new(String::new());

    let review = RwSignal::new(None::<ReviewAction>);
    let reason = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let load_data = move || {
        let Some(filters) = state.try_with_untracked(|s| s.filters()) else {
            return;
        };
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.documents = LoadState::Loading);
        spawn_local(async move {
            let result = get_all_documents(&client, &filters).await;
            if ticket.is_current() {
                state.update(|s| s.documents = LoadState::from_result(result));
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let apply_search = move || {
        let text = search_input.get_untracked();
        state.update(|s| s.search = text);
        load_data();
    };

    let start_review = move |action: ReviewAction| {
        reason.set(String::new());
        action_error.set(None);
        review.set(Some(action));
    };

    let confirm_review = move || {
        let Some(action) = review.get_untracked() else {
            return;
        };
        let text = reason.get_untracked();
        let client = api.get_value();
        saving.set(true);
        spawn_local(async move {
            let result = match action {
                ReviewAction::Approve(id) => approve_document(&client, id).await,
                ReviewAction::Reject(id) => reject_document(&client, id, &text).await,
            };
            match result {
                Ok(()) => {
                    review.set(None);
                    state.update(|s| s.preview = None);
                    load_data();
                }
                Err(err) => action_error.set(Some(failure_message(&err))),
            }
            saving.set(false);
        });
    };

    let preview = Memo::new(move |_| {
        state.with(|s| s.preview.and_then(|id| s.find(id)))
    });

    let pending_count = Signal::derive(move || {
        state.with(|s| {
            s.documents
                .ready()
                .map(|d| d.iter().filter(|d| d.is_reviewable()).count())
                .unwrap_or(0)
        })
    });

    view! {
        <PageFrame page_id="a003_verification_documents--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shield")}
                    <h1 class="page__title">"Verificación de documentos"</h1>
                    <Badge variant=BadgeVariant::Warning>
                        {move || format!("{} pendientes", pending_count.get())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || state.with(|s| s.documents.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content filter-panel-content--inline">
                        <div class="form-group form-group--grow" on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_search();
                            }
                        }>
                            <label>"Buscar"</label>
                            <Input value=search_input placeholder="Nombre o email..." />
                        </div>
                        <div class="form-group">
                            <label>"Estado"</label>
                            <select
                                class="select"
                                prop:value=move || state.with(|s| s.status.code())
                                on:change=move |ev| {
                                    let status = Choice::parse(&event_target_value(&ev), DocumentStatus::from_code);
                                    state.update(|s| s.status = status);
                                    load_data();
                                }
                            >
                                <option value="ALL">"Todos"</option>
                                {DocumentStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Tipo"</label>
                            <select
                                class="select"
                                prop:value=move || state.with(|s| s.document_type.code())
                                on:change=move |ev| {
                                    let document_type = Choice::parse(&event_target_value(&ev), DocumentType::from_code);
                                    state.update(|s| s.document_type = document_type);
                                    load_data();
                                }
                            >
                                <option value="ALL">"Todos"</option>
                                {DocumentType::all().into_iter().map(|t| view! {
                                    <option value=t.code()>{t.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Buscar"
                        </Button>
                    </div>
                </div>

                {move || action_error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

                {move || match state.with(|s| s.documents.clone()) {
                    LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                    LoadState::Failed { message, recoverable } => view! {
                        <ErrorState
                            message=message
                            on_retry=recoverable.then(|| Callback::new(move |_| load_data()))
                        />
                    }.into_any(),
                    LoadState::Ready(docs) if docs.is_empty() => view! {
                        <div class="empty-state">"No hay documentos con estos filtros"</div>
                    }.into_any(),
                    LoadState::Ready(docs) => view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 860px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Usuario"</TableHeaderCell>
                                        <TableHeaderCell>"Documento"</TableHeaderCell>
                                        <TableHeaderCell>"Estado"</TableHeaderCell>
                                        <TableHeaderCell>"Subido"</TableHeaderCell>
                                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {docs.into_iter().map(|doc| {
                                        let id = doc.id;
                                        let reviewable = doc.is_reviewable();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <A href=format!("/users/{}", doc.user_id) attr:class="table__link">
                                                        {doc.user_name.clone()}
                                                    </A>
                                                    <div class="table__subtext">{doc.user_email.clone().unwrap_or_default()}</div>
                                                </TableCell>
                                                <TableCell>{doc.document_type.display_name()}</TableCell>
                                                <TableCell><SpecBadge spec=document_status_badge(doc.status) /></TableCell>
                                                <TableCell>{format_datetime(&doc.created_at)}</TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button
                                                            class="button button--small"
                                                            on:click=move |_| state.update(|s| s.preview = Some(id))
                                                        >
                                                            {icon("eye")}" Ver"
                                                        </button>
                                                        <Show when=move || reviewable>
                                                            <button
                                                                class="button button--small button--primary"
                                                                on:click=move |_| start_review(ReviewAction::Approve(id))
                                                            >
                                                                "Aprobar"
                                                            </button>
                                                            <button
                                                                class="button button--small button--danger"
                                                                on:click=move |_| start_review(ReviewAction::Reject(id))
                                                            >
                                                                "Rechazar"
                                                            </button>
                                                        </Show>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }.into_any(),
                }}
            </div>

            {move || preview.get().map(|document| view! {
                <DocumentPreview
                    document=document
                    on_close=Callback::new(move |_| state.update(|s| s.preview = None))
                    on_review=Callback::new(start_review)
                />
            })}

            {move || review.get().map(|action| {
                let message = match action {
                    ReviewAction::Approve(_) => "El documento quedará aprobado y el usuario será notificado.",
                    ReviewAction::Reject(_) => "El usuario deberá subir un nuevo documento.",
                };
                let reason_signal = action.needs_reason().then_some(reason);
                view! {
                    <ConfirmModal
                        title=action.title()
                        message=message
                        confirm_label=action.confirm_label()
                        reason=reason_signal
                        reason_required=action.needs_reason()
                        busy=saving
                        on_confirm=Callback::new(move |_| confirm_review())
                        on_cancel=Callback::new(move |_| review.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
