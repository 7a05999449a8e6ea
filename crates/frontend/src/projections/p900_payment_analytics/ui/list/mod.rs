pub mod state;

use contracts::enums::tier::tier_label;
use contracts::enums::{Tier, UserState};
use contracts::projections::p900_payment_analytics::{
    PaymentAnalyticsStatistics, SortBy, SortOrder, UserPaymentData,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use self::state::{create_state, parse_amount, parse_flag, PaymentAnalyticsState};
use crate::projections::p900_payment_analytics::api::{
    export_payment_analytics_csv, get_payment_analytics,
};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::load_state::{failure_message, LoadState};
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

/// Balances and payout readiness of workers, embedded in the transactions page
#[component]
pub fn PaymentAnalyticsTab() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let seq = StoredValue::new(RequestSequence::new());
    let min_balance_input = RwSignal::new(String::new());
    let max_balance_input = RwSignal::new(String::new());
    let export_error = RwSignal::new(None::<String>);

    let load_data = move || {
        let filters = state.with_untracked(|s| s.filters());
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.data = LoadState::Loading);
        spawn_local(async move {
            let result = get_payment_analytics(&client, &filters).await;
            if !ticket.is_current() {
                log::debug!("Dropping stale payment analytics response");
                return;
            }
            state.update(|s| s.data = LoadState::from_result(result));
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let set_filter = move |apply: Box<dyn FnOnce(&mut PaymentAnalyticsState)>| {
        state.update(|s| {
            apply(s);
            s.page = 1;
        });
        load_data();
    };

    let apply_balances = move || {
        let min = parse_amount(&min_balance_input.get_untracked());
        let max = parse_amount(&max_balance_input.get_untracked());
        set_filter(Box::new(move |s| {
            s.min_balance = min;
            s.max_balance = max;
        }));
    };

    let clear_filters = move || {
        min_balance_input.set(String::new());
        max_balance_input.set(String::new());
        state.update(|s| s.clear_filters());
        load_data();
    };

    let toggle_sort = move |key: &'static str| {
        if let Some(column) = SortBy::from_code(key) {
            state.update(|s| s.toggle_sort(column));
            load_data();
        }
    };

    let export_csv = move || {
        let filters = state.with_untracked(|s| s.filters());
        let result = api.with_value(|client| export_payment_analytics_csv(client, &filters));
        export_error.set(result.err().map(|err| failure_message(&err)));
    };

    let pagination = Signal::derive(move || state.with(|s| s.pagination()));
    let active_key = Signal::derive(move || state.with(|s| s.sort_by.code()));
    let ascending = Signal::derive(move || state.with(|s| s.sort_order == SortOrder::Asc));
    let on_sort = Callback::new(toggle_sort);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content filter-panel-content--inline">
                <div class="form-group">
                    <label>"Cuenta bancaria"</label>
                    <select
                        class="select"
                        prop:value=move || state.with(|s| flag_value(s.has_bank_account))
                        on:change=move |ev| {
                            let value = parse_flag(&event_target_value(&ev));
                            set_filter(Box::new(move |s| s.has_bank_account = value));
                        }
                    >
                        <option value="">"Todos"</option>
                        <option value="true">"Con cuenta"</option>
                        <option value="false">"Sin cuenta"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>"Nivel"</label>
                    <select
                        class="select"
                        prop:value=move || state.with(|s| s.tier.map(|t| t.code()).unwrap_or_default())
                        on:change=move |ev| {
                            let tier = Tier::from_code(&event_target_value(&ev));
                            set_filter(Box::new(move |s| s.tier = tier));
                        }
                    >
                        <option value="">"Todos"</option>
                        {Tier::all()
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Estado"</label>
                    <select
                        class="select"
                        prop:value=move || state.with(|s| s.user_state.map(|st| st.code()).unwrap_or_default())
                        on:change=move |ev| {
                            let user_state = UserState::from_code(&event_target_value(&ev));
                            set_filter(Box::new(move |s| s.user_state = user_state));
                        }
                    >
                        <option value="">"Todos"</option>
                        {UserState::assignable()
                            .into_iter()
                            .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Identidad"</label>
                    <select
                        class="select"
                        prop:value=move || state.with(|s| flag_value(s.identity_verified))
                        on:change=move |ev| {
                            let value = parse_flag(&event_target_value(&ev));
                            set_filter(Box::new(move |s| s.identity_verified = value));
                        }
                    >
                        <option value="">"Todos"</option>
                        <option value="true">"Verificada"</option>
                        <option value="false">"Sin verificar"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>"Saldo mínimo"</label>
                    <input
                        type="number"
                        class="input"
                        min="0"
                        prop:value=move || min_balance_input.get()
                        on:input=move |ev| min_balance_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Saldo máximo"</label>
                    <input
                        type="number"
                        class="input"
                        min="0"
                        prop:value=move || max_balance_input.get()
                        on:input=move |ev| max_balance_input.set(event_target_value(&ev))
                    />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_balances()>
                    {icon("filter")}
                    " Aplicar"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear_filters()>
                    "Limpiar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export_csv()>
                    {icon("download")}
                    " Exportar CSV"
                </Button>
            </div>
        </div>

        {move || export_error.get().map(|msg| view! {
            <div class="alert alert--error">{msg}</div>
        })}

        {move || match state.with(|s| s.data.clone()) {
            LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
            LoadState::Failed { message, recoverable } => view! {
                <ErrorState
                    message=message
                    on_retry=recoverable.then(|| Callback::new(move |_| load_data()))
                />
            }
            .into_any(),
            LoadState::Ready(data) => {
                let users = state.with_untracked(|s| s.visible_users());
                view! {
                    <StatisticsCards statistics=data.statistics />
                    {if users.is_empty() {
                        view! { <div class="empty-state">"No hay usuarios con estos filtros"</div> }.into_any()
                    } else {
                        view! {
                            <div class="table-wrapper">
                                <Table attr:style="width: 100%; min-width: 1000px;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=200.0>"Usuario"</TableHeaderCell>
                                            <SortableHeaderCell
                                                label=SortBy::Tier.display_name()
                                                sort_key=SortBy::Tier.code()
                                                active_key=active_key
                                                ascending=ascending
                                                on_sort=on_sort
                                                min_width=90.0
                                            />
                                            <SortableHeaderCell
                                                label="Disponible"
                                                sort_key=SortBy::Balance.code()
                                                active_key=active_key
                                                ascending=ascending
                                                on_sort=on_sort
                                                min_width=120.0
                                            />
                                            <TableHeaderCell min_width=110.0>"Pendiente"</TableHeaderCell>
                                            <SortableHeaderCell
                                                label=SortBy::Earnings.display_name()
                                                sort_key=SortBy::Earnings.code()
                                                active_key=active_key
                                                ascending=ascending
                                                on_sort=on_sort
                                                min_width=120.0
                                            />
                                            <SortableHeaderCell
                                                label=SortBy::TotalTasks.display_name()
                                                sort_key=SortBy::TotalTasks.code()
                                                active_key=active_key
                                                ascending=ascending
                                                on_sort=on_sort
                                                min_width=80.0
                                            />
                                            <TableHeaderCell min_width=100.0>"Verificación"</TableHeaderCell>
                                            <TableHeaderCell min_width=160.0>"Cuenta bancaria"</TableHeaderCell>
                                            <SortableHeaderCell
                                                label="Registro"
                                                sort_key=SortBy::RegisteredDate.code()
                                                active_key=active_key
                                                ascending=ascending
                                                on_sort=on_sort
                                                min_width=110.0
                                            />
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {users.into_iter().map(user_row).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                        .into_any()
                    }}
                }
                .into_any()
            }
        }}

        <PaginationControls
            current_page=Signal::derive(move || pagination.get().current_page)
            total_pages=Signal::derive(move || pagination.get().total_pages)
            total_count=Signal::derive(move || pagination.get().total_count)
            page_size=Signal::derive(move || state.with(|s| s.page_size))
            on_page_change=Callback::new(move |page: u32| {
                state.update(|s| s.page = page);
                load_data();
            })
            on_page_size_change=Callback::new(move |size: u32| {
                state.update(|s| {
                    s.page_size = size;
                    s.page = 1;
                });
                load_data();
            })
        />
    }
}

#[component]
fn StatisticsCards(statistics: PaymentAnalyticsStatistics) -> impl IntoView {
    let tiers = Tier::all()
        .into_iter()
        .map(|t| format!("{} {}", t.display_name(), format_count(statistics.tier_count(t))))
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="stat-grid">
            <StatCard
                label="Usuarios"
                icon_name="users"
                value=format_count(statistics.total_users)
                subtitle=Some(tiers)
            />
            <StatCard
                label="Con cuenta bancaria"
                icon_name="wallet"
                value=format!("{}%", statistics.percent_with_bank)
                subtitle=Some(format!(
                    "{} con cuenta, {} sin cuenta",
                    format_count(statistics.users_with_bank),
                    format_count(statistics.users_without_bank)
                ))
            />
            <StatCard
                label="Saldo disponible"
                icon_name="dollar"
                value=format_clp(statistics.total_available_balance)
                tone=CardTone::Success
                subtitle=Some(format!("Promedio {}", format_clp(statistics.avg_available_balance)))
            />
            <StatCard
                label="Saldo pendiente"
                icon_name="wallet"
                value=format_clp(statistics.total_pending_balance)
                tone=CardTone::Warning
                subtitle=Some(format!("Ganancias totales {}", format_clp(statistics.total_earnings_sum)))
            />
            <StatCard
                label="Identidad verificada"
                icon_name="shield"
                value=format!("{}%", statistics.percent_identity_verified)
                subtitle=Some(format!(
                    "Antecedentes {} · Domicilio {}",
                    format_count(statistics.criminal_record_verified_count),
                    format_count(statistics.address_verified_count)
                ))
            />
        </div>
    }
}

/// Select value of an optional flag
fn flag_value(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

fn user_row(user: UserPaymentData) -> impl IntoView {
    let checks = [
        user.identity_verified,
        user.criminal_record_verified,
        user.address_verified,
    ]
    .iter()
    .filter(|v| **v)
    .count();
    let bank = user
        .bank_account
        .as_ref()
        .map(|b| format!("{} · {}", b.banco, b.tipo_cuenta))
        .unwrap_or_else(|| "Sin cuenta".to_string());

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <A href=format!("/users/{}", user.id) attr:class="table__link">{user.name.clone()}</A>
                    <div class="table__subtext">{user.email.clone()}</div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                {user.tier.as_deref().map(tier_label).unwrap_or_else(|| "—".to_string())}
            </TableCell>
            <TableCellMoney value=user.available_balance bold=true color_by_sign=false />
            <TableCellMoney value=user.pending_balance color_by_sign=false />
            <TableCellMoney value=user.total_earnings color_by_sign=false />
            <TableCell>{format!("{}/{}", user.completed_tasks_count, user.total_tasks)}</TableCell>
            <TableCell>{format!("{}/3", checks)}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{bank}</TableCellLayout>
            </TableCell>
            <TableCell>{format_date(&user.created_at)}</TableCell>
        </TableRow>
    }
}
