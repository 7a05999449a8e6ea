use contracts::domain::a002_support_tickets::{
    SupportTicket, TicketMessage, TicketPriority, TicketStatus, TicketUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_support_tickets::api::{
    get_ticket_details, get_ticket_messages, reply_to_ticket, update_ticket,
};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::ui::badge::{ticket_priority_badge, ticket_status_badge, SpecBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::load_state::{failure_message, LoadState};
use crate::shared::modal::Modal;
use crate::system::auth::context::use_api;

/// Changes between the ticket as loaded and the values picked in the form
pub fn pending_update(
    ticket: &SupportTicket,
    status: TicketStatus,
    priority: TicketPriority,
) -> TicketUpdate {
    TicketUpdate {
        status: (status != ticket.status).then_some(status),
        priority: (priority != ticket.priority).then_some(priority),
        assigned_to: None,
    }
}

/// Ticket conversation with reply box and status/priority controls.
/// `on_changed` fires after every successful mutation so the list reloads.
#[component]
pub fn TicketDetailModal(ticket_id: i64, on_close: Callback<()>, on_changed: Callback<()>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ticket = RwSignal::new(LoadState::<SupportTicket>::Loading);
    let messages = RwSignal::new(Vec::<TicketMessage>::new());
    let status = RwSignal::new(TicketStatus::New);
    let priority = RwSignal::new(TicketPriority::Medium);
    let reply = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let load = move || {
        let Some(client) = api.try_get_value() else {
            return;
        };
        ticket.set(LoadState::Loading);
        spawn_local(async move {
            let details = get_ticket_details(&client, ticket_id).await;
            if let Ok(t) = &details {
                status.set(t.status);
                priority.set(t.priority);
            }
            ticket.set(LoadState::from_result(details));
            match get_ticket_messages(&client, ticket_id).await {
                Ok(list) => messages.set(list),
                Err(err) => action_error.set(Some(failure_message(&err))),
            }
        });
    };

    load();

    let save = move || {
        let Some(update) = ticket.with_untracked(|t| {
            t.ready().map(|t| pending_update(t, status.get_untracked(), priority.get_untracked()))
        }) else {
            return;
        };
        let client = api.get_value();
        busy.set(true);
        action_error.set(None);
        spawn_local(async move {
            match update_ticket(&client, ticket_id, &update).await {
                Ok(_) => {
                    on_changed.try_run(());
                    load();
                }
                Err(err) => action_error.set(Some(failure_message(&err))),
            }
            busy.set(false);
        });
    };

    let send_reply = move || {
        let text = reply.get_untracked();
        let client = api.get_value();
        busy.set(true);
        action_error.set(None);
        spawn_local(async move {
            match reply_to_ticket(&client, ticket_id, &text).await {
                Ok(_) => {
                    reply.set(String::new());
                    on_changed.try_run(());
                    load();
                }
                Err(err) => action_error.set(Some(failure_message(&err))),
            }
            busy.set(false);
        });
    };

    let has_changes = move || {
        ticket.with(|t| {
            t.ready()
                .map(|t| !pending_update(t, status.get(), priority.get()).is_empty())
                .unwrap_or(false)
        })
    };

    view! {
        <Modal title=format!("Ticket #{}", ticket_id) on_close=on_close wide=true>
            {move || action_error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

            {move || match ticket.get() {
                LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                LoadState::Failed { message, recoverable } => view! {
                    <ErrorState
                        message=message
                        on_retry=recoverable.then(|| Callback::new(move |_| load()))
                    />
                }.into_any(),
                LoadState::Ready(t) => view! {
                    <div class="ticket-detail">
                        <div class="ticket-detail__header">
                            <h3>{t.subject.clone()}</h3>
                            <SpecBadge spec=ticket_status_badge(t.status) />
                            <SpecBadge spec=ticket_priority_badge(t.priority) />
                        </div>
                        <div class="ticket-detail__meta">
                            {format!(
                                "{} · {} · {}",
                                t.user_name,
                                t.category.display_name(),
                                format_datetime(&t.created_at)
                            )}
                            {t.assigned_to_name.clone().map(|name| format!(" · Asignado a {}", name))}
                        </div>
                        <p class="ticket-detail__description">{t.description.clone()}</p>

                        <div class="filter-panel-content filter-panel-content--inline">
                            <div class="form-group">
                                <label>"Estado"</label>
                                <select
                                    class="select"
                                    prop:value=move || status.get().code()
                                    on:change=move |ev| {
                                        if let Some(s) = TicketStatus::from_code(&event_target_value(&ev)) {
                                            status.set(s);
                                        }
                                    }
                                >
                                    {TicketStatus::all().into_iter().map(|s| view! {
                                        <option value=s.code()>{s.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Prioridad"</label>
                                <select
                                    class="select"
                                    prop:value=move || priority.get().code()
                                    on:change=move |ev| {
                                        if let Some(p) = TicketPriority::from_code(&event_target_value(&ev)) {
                                            priority.set(p);
                                        }
                                    }
                                >
                                    {TicketPriority::all().into_iter().map(|p| view! {
                                        <option value=p.code()>{p.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <button
                                class="button button--primary"
                                disabled=move || busy.get() || !has_changes()
                                on:click=move |_| save()
                            >
                                "Guardar cambios"
                            </button>
                        </div>
                    </div>
                }.into_any(),
            }}

            <div class="ticket-messages">
                <h4>"Conversación"</h4>
                <For
                    each=move || messages.get()
                    key=|m| m.id
                    children=move |m| {
                        let class = if m.is_from_staff {
                            "ticket-message ticket-message--staff"
                        } else {
                            "ticket-message"
                        };
                        view! {
                            <div class=class>
                                <div class="ticket-message__author">
                                    {m.from_user_name.clone()}
                                    <span class="text-muted">{format!(" · {}", format_datetime(&m.created_at))}</span>
                                </div>
                                <div class="ticket-message__body">{m.message.clone()}</div>
                            </div>
                        }
                    }
                />
                <Show when=move || messages.with(|m| m.is_empty())>
                    <p class="text-muted">"Sin mensajes"</p>
                </Show>
            </div>

            <div class="form-group">
                <label>"Responder"</label>
                <textarea
                    class="textarea"
                    rows="3"
                    prop:value=move || reply.get()
                    on:input=move |ev| reply.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="button button--primary"
                    disabled=move || busy.get() || reply.with(|r| r.trim().is_empty())
                    on:click=move |_| send_reply()
                >
                    "Enviar respuesta"
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_support_tickets::api::tests::ticket_json;

    #[test]
    fn test_pending_update_only_changed_fields() {
        let ticket: SupportTicket = serde_json::from_value(ticket_json(1, "OPEN")).unwrap();

        let none = pending_update(&ticket, TicketStatus::Open, TicketPriority::High);
        assert!(none.is_empty());

        let resolved = pending_update(&ticket, TicketStatus::Resolved, TicketPriority::High);
        assert_eq!(resolved, TicketUpdate::status(TicketStatus::Resolved));
    }
}
