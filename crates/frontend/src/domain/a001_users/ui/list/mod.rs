pub mod payouts;
pub mod state;

use contracts::domain::a001_users::AdminUser;
use contracts::enums::tier::tier_label;
use contracts::enums::UserState;
use contracts::shared::query::Choice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use self::payouts::PendingPayoutsTab;
use self::state::{action_label, create_state, status_actions, StatusChangeDraft};
use crate::domain::a001_users::api::{get_all_users, update_user_status};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::number_format::format_clp;
use crate::shared::components::ui::badge::{user_state_badge, Badge, BadgeVariant, SpecBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::load_state::{failure_message, LoadState};
use crate::shared::modal::ConfirmModal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

#[component]
pub fn UsersList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let seq = StoredValue::new(RequestSequence::new());
    let search_input = RwSignal::new(String::new());
    let active_tab = RwSignal::new("users");

    let draft = RwSignal::new(None::<StatusChangeDraft>);
    let reason = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let load_data = move || {
        let Some(filters) = state.try_with_untracked(|s| s.filters()) else {
            return;
        };
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.users = LoadState::Loading);
        spawn_local(async move {
            let result = get_all_users(&client, &filters).await;
            if !ticket.is_current() {
                log::debug!("Dropping stale users response");
                return;
            }
            state.update(|s| s.users = LoadState::from_result(result));
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let apply_search = move || {
        let text = search_input.get_untracked();
        state.update(|s| {
            s.search = text;
            s.page = 1;
        });
        load_data();
    };

    let go_to_page = move |page: u32| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: u32| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        load_data();
    };

    let open_change = move |user: &AdminUser, target: UserState| {
        reason.set(String::new());
        action_error.set(None);
        draft.set(Some(StatusChangeDraft {
            user_id: user.id,
            user_name: user.name.clone(),
            target,
        }));
    };

    let confirm_change = move || {
        let Some(pending) = draft.get_untracked() else {
            return;
        };
        let update = pending.to_update(&reason.get_untracked());
        let client = api.get_value();
        saving.set(true);
        spawn_local(async move {
            match update_user_status(&client, pending.user_id, &update).await {
                Ok(_) => {
                    draft.set(None);
                    load_data();
                }
                Err(err) => action_error.set(Some(failure_message(&err))),
            }
            saving.set(false);
        });
    };

    let pagination = Signal::derive(move || {
        state.with(|s| s.users.ready().map(|p| p.pagination).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="a001_users--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Usuarios"</h1>
                    <Badge variant=BadgeVariant::Primary>
                        {move || pagination.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || state.with(|s| s.users.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__tabs">
                <Button
                    appearance=Signal::derive(move || if active_tab.get() == "users" {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    })
                    on_click=move |_| active_tab.set("users")
                >
                    "Usuarios"
                </Button>
                <Button
                    appearance=Signal::derive(move || if active_tab.get() == "payouts" {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    })
                    on_click=move |_| active_tab.set("payouts")
                >
                    "Pagos pendientes"
                </Button>
            </div>

            <div class="page__content">
                <Show
                    when=move || active_tab.get() == "users"
                    fallback=move || view! { <PendingPayoutsTab state=state /> }
                >
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
                                        let status = Choice::parse(&event_target_value(&ev), UserState::from_code);
                                        state.update(|s| {
                                            s.status = status;
                                            s.page = 1;
                                        });
                                        load_data();
                                    }
                                >
                                    <option value="ALL">"Todos"</option>
                                    {UserState::assignable()
                                        .into_iter()
                                        .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Verificación"</label>
                                <select
                                    class="select"
                                    on:change=move |ev| {
                                        let verified = match event_target_value(&ev).as_str() {
                                            "true" => Some(true),
                                            "false" => Some(false),
                                            _ => None,
                                        };
                                        state.update(|s| {
                                            s.verified = verified;
                                            s.page = 1;
                                        });
                                        load_data();
                                    }
                                >
                                    <option value="">"Todos"</option>
                                    <option value="true">"Verificados"</option>
                                    <option value="false">"Sin verificar"</option>
                                </select>
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                                {icon("search")}
                                " Buscar"
                            </Button>
                        </div>
                    </div>

                    {move || action_error.get().map(|msg| view! {
                        <div class="alert alert--error">{msg}</div>
                    })}

                    {move || match state.with(|s| s.users.clone()) {
                        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                        LoadState::Failed { message, recoverable } => view! {
                            <ErrorState
                                message=message
                                on_retry=recoverable.then(|| Callback::new(move |_| load_data()))
                            />
                        }.into_any(),
                        LoadState::Ready(page) if page.users.is_empty() => view! {
                            <div class="empty-state">"No se encontraron usuarios"</div>
                        }.into_any(),
                        LoadState::Ready(page) => view! {
                            <div class="table-wrapper">
                                <Table attr:style="width: 100%; min-width: 960px;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=200.0>"Usuario"</TableHeaderCell>
                                            <TableHeaderCell min_width=110.0>"Estado"</TableHeaderCell>
                                            <TableHeaderCell min_width=90.0>"Nivel"</TableHeaderCell>
                                            <TableHeaderCell min_width=80.0>"Tareas"</TableHeaderCell>
                                            <TableHeaderCell min_width=80.0>"Rating"</TableHeaderCell>
                                            <TableHeaderCell min_width=120.0>"Ganancias"</TableHeaderCell>
                                            <TableHeaderCell min_width=100.0>"Verificación"</TableHeaderCell>
                                            <TableHeaderCell min_width=110.0>"Registro"</TableHeaderCell>
                                            <TableHeaderCell min_width=200.0>"Acciones"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {page.users.into_iter().map(|user| {
                                            let href = format!("/users/{}", user.id);
                                            let actions = status_actions(user.state);
                                            let user_for_actions = StoredValue::new(user.clone());
                                            let name = user.name.clone();
                                            let email = user.email.clone();
                                            let state_badge = user_state_badge(user.state);
                                            let tier = user.tier.as_deref().map(tier_label).unwrap_or_else(|| "—".to_string());
                                            let total_tasks = user.total_tasks;
                                            let rating = format!("{:.1}", user.average_rating);
                                            let earnings = format_clp(user.earnings_total);
                                            let checks = format!("{}/3", user.verified_checks());
                                            let created = format_date(&user.created_at);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <A href=href attr:class="table__link">{name}</A>
                                                            <div class="table__subtext">{email}</div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <SpecBadge spec=state_badge />
                                                    </TableCell>
                                                    <TableCell>{tier}</TableCell>
                                                    <TableCell>{total_tasks}</TableCell>
                                                    <TableCell>{rating}</TableCell>
                                                    <TableCell>{earnings}</TableCell>
                                                    <TableCell>{checks}</TableCell>
                                                    <TableCell>{created}</TableCell>
                                                    <TableCell>
                                                        <div class="table__actions">
                                                            {actions.into_iter().map(|target| view! {
                                                                <button
                                                                    class={if target == UserState::Ok {
                                                                        "button button--small"
                                                                    } else {
                                                                        "button button--small button--danger"
                                                                    }}
                                                                    on:click=move |_| user_for_actions.with_value(|u| open_change(u, target))
                                                                >
                                                                    {action_label(target)}
                                                                </button>
                                                            }).collect_view()}
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

                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || pagination.get().total_pages)
                        total_count=Signal::derive(move || pagination.get().total_count)
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                </Show>
            </div>

            {move || draft.get().map(|pending| view! {
                <ConfirmModal
                    title=pending.title()
                    message=pending.message()
                    confirm_label=action_label(pending.target)
                    reason=Some(reason)
                    reason_required=pending.reason_required()
                    busy=saving
                    on_confirm=Callback::new(move |_| confirm_change())
                    on_cancel=Callback::new(move |_| draft.set(None))
                />
            })}
        </PageFrame>
    }
}
