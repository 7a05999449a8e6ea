pub mod detail;
pub mod state;

use contracts::domain::a002_support_tickets::{TicketCategory, TicketPriority, TicketStatus};
use contracts::shared::query::Choice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use self::detail::TicketDetailModal;
use self::state::{create_state, TicketsListState};
use crate::domain::a002_support_tickets::api::get_all_tickets;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::ui::badge::SpecBadge;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

#[component]
pub fn SupportTicketsList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let seq = StoredValue::new(RequestSequence::new());
    let search_input = RwSignal::new(String::new());

    let load_data = move || {
        let filters = state.with_untracked(|s| s.filters());
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.tickets = LoadState::Loading);
        spawn_local(async move {
            let result = get_all_tickets(&client, &filters).await;
            if ticket.is_current() {
                state.update(|s| s.tickets = LoadState::from_result(result));
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let set_filter = move |apply: Box<dyn FnOnce(&mut TicketsListState)>| {
        state.update(|s| {
            apply(s);
            s.page = 1;
        });
        load_data();
    };

    let apply_search = move || {
        let text = search_input.get_untracked();
        set_filter(Box::new(move |s| s.search = text));
    };

    let pagination = Signal::derive(move || state.with(|s| s.pagination()));
    // Memo so list reloads do not rebuild an open modal
    let selected = Memo::new(move |_| state.with(|s| s.selected));
    let count_of = move |status: TicketStatus| {
        Signal::derive(move || state.with(|s| s.count_by_status(status).to_string()))
    };

    view! {
        <PageFrame page_id="a002_support_tickets--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("message")}
                    <h1 class="page__title">"Soporte"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || state.with(|s| s.tickets.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Nuevos" icon_name="alert" tone=CardTone::Warning value=count_of(TicketStatus::New) />
                    <StatCard label="Abiertos" icon_name="message" value=count_of(TicketStatus::Open) />
                    <StatCard label="En progreso" icon_name="activity" value=count_of(TicketStatus::InProgress) />
                    <StatCard label="Resueltos" icon_name="check" tone=CardTone::Success value=count_of(TicketStatus::Resolved) />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-content filter-panel-content--inline">
                        <div class="form-group form-group--grow" on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_search();
                            }
                        }>
                            <label>"Buscar"</label>
                            <Input value=search_input placeholder="Asunto o usuario..." />
                        </div>
                        <div class="form-group">
                            <label>"Estado"</label>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    let status = Choice::parse(&event_target_value(&ev), TicketStatus::from_code);
                                    set_filter(Box::new(move |s| s.status = status));
                                }
                            >
                                <option value="ALL">"Todos"</option>
                                {TicketStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Prioridad"</label>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    let priority = Choice::parse(&event_target_value(&ev), TicketPriority::from_code);
                                    set_filter(Box::new(move |s| s.priority = priority));
                                }
                            >
                                <option value="ALL">"Todas"</option>
                                {TicketPriority::all().into_iter().map(|p| view! {
                                    <option value=p.code()>{p.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Categoría"</label>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    let category = Choice::parse(&event_target_value(&ev), TicketCategory::from_code);
                                    set_filter(Box::new(move |s| s.category = category));
                                }
                            >
                                <option value="ALL">"Todas"</option>
                                {TicketCategory::all().into_iter().map(|c| view! {
                                    <option value=c.code()>{c.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Buscar"
                        </Button>
                    </div>
                </div>

                {move || {
                    let (tickets, rows) = state.with(|s| (s.tickets.clone(), s.visible_rows()));
                    match tickets {
                        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                        LoadState::Failed { message, recoverable } => view! {
                            <ErrorState
                                message=message
                                on_retry=recoverable.then(|| Callback::new(move |_| load_data()))
                            />
                        }.into_any(),
                        LoadState::Ready(_) if rows.is_empty() => view! {
                            <div class="empty-state">"No hay tickets con estos filtros"</div>
                        }.into_any(),
                        LoadState::Ready(_) => view! {
                            <div class="table-wrapper">
                                <Table attr:style="width: 100%; min-width: 900px;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                                            <TableHeaderCell min_width=260.0>"Asunto"</TableHeaderCell>
                                            <TableHeaderCell min_width=160.0>"Usuario"</TableHeaderCell>
                                            <TableHeaderCell min_width=120.0>"Categoría"</TableHeaderCell>
                                            <TableHeaderCell min_width=120.0>"Estado"</TableHeaderCell>
                                            <TableHeaderCell min_width=100.0>"Prioridad"</TableHeaderCell>
                                            <TableHeaderCell min_width=90.0>"Respuestas"</TableHeaderCell>
                                            <TableHeaderCell min_width=140.0>"Actualizado"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {rows.into_iter().map(|row| {
                                            let id = row.id;
                                            view! {
                                                <TableRow>
                                                    <TableCell>{format!("#{}", id)}</TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |e| {
                                                                    e.prevent_default();
                                                                    state.update(|s| s.selected = Some(id));
                                                                }
                                                            >
                                                                {row.subject.clone()}
                                                            </a>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>{row.user_name.clone()}</TableCell>
                                                    <TableCell>{row.category}</TableCell>
                                                    <TableCell><SpecBadge spec=row.status /></TableCell>
                                                    <TableCell><SpecBadge spec=row.priority /></TableCell>
                                                    <TableCell>{row.responses}</TableCell>
                                                    <TableCell>{row.updated_at.clone()}</TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }.into_any(),
                    }
                }}

                <PaginationControls
                    current_page=Signal::derive(move || pagination.get().current_page)
                    total_pages=Signal::derive(move || pagination.get().total_pages)
                    total_count=Signal::derive(move || pagination.get().total_count)
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                    on_page_size_change=Callback::new(move |size| state.update(|s| {
                        s.page_size = size;
                        s.page = 1;
                    }))
                />
            </div>

            {move || selected.get().map(|id| view! {
                <TicketDetailModal
                    ticket_id=id
                    on_close=Callback::new(move |_| state.update(|s| s.selected = None))
                    on_changed=Callback::new(move |_| load_data())
                />
            })}
        </PageFrame>
    }
}
