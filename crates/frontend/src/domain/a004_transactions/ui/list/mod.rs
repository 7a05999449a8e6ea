pub mod state;

use contracts::domain::a004_transactions::Transaction;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use self::state::{create_state, fee_bars, period_label, type_bars, TransactionsState, PERIOD_OPTIONS};
use crate::domain::a004_transactions::api::{
    get_platform_balance, get_recent_transactions, get_stats,
};
use crate::projections::p900_payment_analytics::ui::PaymentAnalyticsTab;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::badge::{Badge, BadgeVariant};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

fn status_variant(status: &str) -> BadgeVariant {
    match status {
        "COMPLETED" => BadgeVariant::Success,
        "PENDING" | "HELD" => BadgeVariant::Warning,
        "FAILED" | "CANCELLED" => BadgeVariant::Error,
        "REFUNDED" => BadgeVariant::Info,
        _ => BadgeVariant::Neutral,
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let stats_seq = StoredValue::new(RequestSequence::new());
    let recent_seq = StoredValue::new(RequestSequence::new());
    let active_tab = RwSignal::new("summary");

    let load_stats = move || {
        let days = state.with_untracked(|s| s.period_days);
        let ticket = stats_seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| {
            s.stats = LoadState::Loading;
            s.balance = LoadState::Loading;
        });
        spawn_local(async move {
            let stats = get_stats(&client, days).await;
            let balance = get_platform_balance(&client).await;
            if !ticket.is_current() {
                log::debug!("Dropping stale transaction stats for {} days", days);
                return;
            }
            state.update(|s| {
                s.stats = LoadState::from_result(stats);
                s.balance = LoadState::from_result(balance);
            });
        });
    };

    let load_recent = move || {
        let query = state.with_untracked(|s| s.recent_query);
        let ticket = recent_seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.recent = LoadState::Loading);
        spawn_local(async move {
            let result = get_recent_transactions(&client, query).await;
            if ticket.is_current() {
                state.update(|s| s.recent = LoadState::from_result(result));
            }
        });
    };

    Effect::new(move |_| {
        load_stats();
        load_recent();
    });

    let change_period = move |days: i64| {
        state.update(|s| s.period_days = days);
        load_stats();
    };

    let go_to_recent_page = move |page: u32| {
        state.update(|s| s.go_to_recent_page(page));
        load_recent();
    };

    let stats_view = move || match state.with(|s| s.stats.clone()) {
        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
        LoadState::Failed { message, recoverable } => view! {
            <ErrorState
                message=message
                on_retry=recoverable.then(|| Callback::new(move |_| load_stats()))
            />
        }
        .into_any(),
        LoadState::Ready(stats) => {
            let types = type_bars(&stats);
            let fees = fee_bars(&stats);
            view! {
                <div class="stat-grid">
                    <StatCard
                        label="Transacciones"
                        icon_name="activity"
                        value=format_count(stats.total_transactions)
                        subtitle=Some(format!("{} usuarios activos", format_count(stats.active_users)))
                    />
                    <StatCard
                        label="Comisiones del período"
                        icon_name="dollar"
                        value=format_clp(stats.period_fees_collected)
                        tone=CardTone::Success
                        subtitle=Some(format!("Total histórico {}", format_clp(stats.total_fees_collected)))
                    />
                    <StatCard
                        label="Pagado a trabajadores"
                        icon_name="wallet"
                        value=format_clp(stats.total_paid_to_workers)
                        subtitle=Some(format!("{} tareas completadas", format_count(stats.completed_tasks)))
                    />
                    <StatCard
                        label="En garantía"
                        icon_name="shield"
                        value=format_clp(stats.held_amount)
                        tone=CardTone::Warning
                        subtitle=Some(format!("{} tareas pendientes", format_count(stats.pending_tasks)))
                    />
                    <StatCard
                        label="Reembolsos"
                        icon_name="refresh"
                        value=format_clp(stats.total_refunds)
                        tone={if stats.total_refunds > 0.0 { CardTone::Error } else { CardTone::Neutral }}
                    />
                </div>
                <div class="chart-grid">
                    <BarChart title="Por tipo de movimiento" data=types />
                    <BarChart title="Comisiones por mes" data=fees />
                </div>
            }
            .into_any()
        }
    };

    let balance_view = move || {
        state.with(|s| s.balance.ready().cloned()).map(|balance| {
            view! {
                <div class="stat-grid">
                    <StatCard label="Saldo disponible" icon_name="wallet" value=format_clp(balance.total_available) />
                    <StatCard label="Saldo pendiente" icon_name="wallet" value=format_clp(balance.total_pending) />
                    <StatCard
                        label="Ganancias de la plataforma"
                        icon_name="chart"
                        value=format_clp(balance.total_earnings)
                        tone=CardTone::Success
                    />
                    <StatCard label="Saldo en garantía" icon_name="shield" value=format_clp(balance.escrow_balance) />
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id="a004_transactions--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dollar")}
                    <h1 class="page__title">"Transacciones"</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="select"
                        prop:value=move || state.with(|s| s.period_days.to_string())
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse::<i64>() {
                                change_period(days);
                            }
                        }
                    >
                        {PERIOD_OPTIONS
                            .into_iter()
                            .map(|days| view! { <option value=days.to_string()>{period_label(days)}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_stats();
                            load_recent();
                        }
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__tabs">
                <Button
                    appearance=Signal::derive(move || if active_tab.get() == "summary" {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    })
                    on_click=move |_| active_tab.set("summary")
                >
                    "Resumen"
                </Button>
                <Button
                    appearance=Signal::derive(move || if active_tab.get() == "analytics" {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    })
                    on_click=move |_| active_tab.set("analytics")
                >
                    "Análisis de pagos"
                </Button>
            </div>

            <div class="page__content">
                <Show
                    when=move || active_tab.get() == "summary"
                    fallback=|| view! { <PaymentAnalyticsTab /> }
                >
                    {stats_view}
                    {balance_view}

                    <h2 class="section__title">"Transacciones recientes"</h2>
                    <RecentTransactions state=state on_retry=Callback::new(move |_| load_recent()) />
                    <div class="pagination">
                        <button
                            class="button button--small"
                            disabled=move || state.with(|s| s.recent_page() <= 1)
                            on:click=move |_| {
                                let page = state.with_untracked(|s| s.recent_page());
                                go_to_recent_page(page.saturating_sub(1).max(1));
                            }
                        >
                            {icon("chevron-left")}
                        </button>
                        <span class="pagination__info">
                            {move || format!("Página {}", state.with(|s| s.recent_page()))}
                        </span>
                        <button
                            class="button button--small"
                            disabled=move || state.with(|s| !s.has_more_recent())
                            on:click=move |_| {
                                let page = state.with_untracked(|s| s.recent_page());
                                go_to_recent_page(page + 1);
                            }
                        >
                            {icon("chevron-right")}
                        </button>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentTransactions(state: RwSignal<TransactionsState>, on_retry: Callback<()>) -> impl IntoView {
    move || match state.with(|s| s.recent.clone()) {
        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
        LoadState::Failed { message, recoverable } => view! {
            <ErrorState message=message on_retry=recoverable.then_some(on_retry) />
        }
        .into_any(),
        LoadState::Ready(rows) if rows.is_empty() => view! {
            <div class="empty-state">"No hay transacciones"</div>
        }
        .into_any(),
        LoadState::Ready(rows) => view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=140.0>"Fecha"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Tipo"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Usuario"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Tarea"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Bruto"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Comisión"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Neto"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Estado"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows.into_iter().map(transaction_row).collect_view()}
                    </TableBody>
                </Table>
            </div>
        }
        .into_any(),
    }
}

fn transaction_row(tx: Transaction) -> impl IntoView {
    let user = tx
        .user_name
        .clone()
        .or_else(|| tx.user_email.clone())
        .unwrap_or_else(|| format!("#{}", tx.user_id));
    let task = tx
        .task_title
        .clone()
        .or_else(|| tx.task_id.map(|id| format!("Tarea #{}", id)))
        .unwrap_or_else(|| "—".to_string());
    let created = format_datetime(&tx.created_at);
    let kind = tx.type_label().to_string();
    let variant = status_variant(&tx.status);
    let status = tx.status_label().to_string();
    view! {
        <TableRow>
            <TableCell>{created}</TableCell>
            <TableCell>{kind}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{user}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{task}</TableCellLayout>
            </TableCell>
            <TableCellMoney value=tx.gross_amount color_by_sign=false />
            <TableCellMoney value=tx.platform_fee color_by_sign=false />
            <TableCellMoney value=tx.net_amount bold=true />
            <TableCell>
                <Badge variant=variant>{status}</Badge>
            </TableCell>
        </TableRow>
    }
}
