use contracts::domain::a001_users::PendingPayoutUser;
use contracts::enums::tier::tier_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow,
};

use super::state::UsersListState;
use crate::domain::a001_users::api::get_pending_payouts;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::components::ui::badge::{Badge, BadgeVariant};
use crate::shared::load_state::LoadState;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

/// Sum of available balances of the workers that can be paid right now
pub fn payable_total(users: &[PendingPayoutUser]) -> f64 {
    users
        .iter()
        .filter(|u| u.can_be_paid())
        .map(|u| u.available_balance)
        .sum()
}

#[component]
pub fn PendingPayoutsTab(state: RwSignal<UsersListState>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let seq = StoredValue::new(RequestSequence::new());
    let min_balance_input = RwSignal::new(state.with_untracked(|s| s.min_balance.to_string()));

    let load_payouts = move || {
        let min_balance = state.with_untracked(|s| s.min_balance);
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        state.update(|s| s.payouts = LoadState::Loading);
        spawn_local(async move {
            let result = get_pending_payouts(&client, Some(min_balance)).await;
            if ticket.is_current() {
                state.update(|s| s.payouts = LoadState::from_result(result));
            }
        });
    };

    Effect::new(move |_| {
        if state.with_untracked(|s| matches!(s.payouts, LoadState::Idle)) {
            load_payouts();
        }
    });

    let apply_min_balance = move || {
        // Non-numeric input keeps the previous threshold
        if let Ok(value) = min_balance_input.get_untracked().trim().parse::<f64>() {
            state.update(|s| s.min_balance = value.max(0.0));
        }
        load_payouts();
    };

    let payouts = Signal::derive(move || {
        state.with(|s| s.payouts.ready().map(|r| r.data.clone()).unwrap_or_default())
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content filter-panel-content--inline">
                <div class="form-group">
                    <label>"Saldo mínimo (CLP)"</label>
                    <input
                        type="number"
                        class="input"
                        min="0"
                        prop:value=move || min_balance_input.get()
                        on:input=move |ev| min_balance_input.set(event_target_value(&ev))
                    />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_min_balance()>
                    "Aplicar"
                </Button>
            </div>
        </div>

        <div class="stat-grid">
            <StatCard
                label="Trabajadores con saldo"
                icon_name="wallet"
                value=Signal::derive(move || format_count(payouts.get().len() as u64))
            />
            <StatCard
                label="Listos para pagar"
                icon_name="check"
                tone=CardTone::Success
                value=Signal::derive(move || {
                    format_count(payouts.get().iter().filter(|u| u.can_be_paid()).count() as u64)
                })
            />
            <StatCard
                label="Monto pagable"
                icon_name="dollar"
                value=Signal::derive(move || format_clp(payable_total(&payouts.get())))
            />
        </div>

        {move || match state.with(|s| s.payouts.clone()) {
            LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
            LoadState::Failed { message, recoverable } => view! {
                <ErrorState
                    message=message
                    on_retry=recoverable.then(|| Callback::new(move |_| load_payouts()))
                />
            }.into_any(),
            LoadState::Ready(response) if response.data.is_empty() => view! {
                <div class="empty-state">"No hay pagos pendientes"</div>
            }.into_any(),
            LoadState::Ready(response) => view! {
                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Trabajador"</TableHeaderCell>
                                <TableHeaderCell>"Nivel"</TableHeaderCell>
                                <TableHeaderCell>"Disponible"</TableHeaderCell>
                                <TableHeaderCell>"Pendiente"</TableHeaderCell>
                                <TableHeaderCell>"Retirado"</TableHeaderCell>
                                <TableHeaderCell>"Cuenta bancaria"</TableHeaderCell>
                                <TableHeaderCell>"Pagable"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {response.data.into_iter().map(|user| {
                                let payable = user.can_be_paid();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <div>{user.name.clone()}</div>
                                            <div class="table__subtext">{user.email.clone()}</div>
                                        </TableCell>
                                        <TableCell>{tier_label(&user.tier)}</TableCell>
                                        <TableCell>{format_clp(user.available_balance)}</TableCell>
                                        <TableCell>{format_clp(user.pending_balance)}</TableCell>
                                        <TableCell>{format_clp(user.total_withdrawn)}</TableCell>
                                        <TableCell>
                                            {user.bank_account_holder.clone().unwrap_or_else(|| {
                                                if user.has_bank_account { "Registrada".to_string() } else { "Sin cuenta".to_string() }
                                            })}
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant={if payable { BadgeVariant::Success } else { BadgeVariant::Warning }}>
                                                {if payable { "Sí" } else { "No" }}
                                            </Badge>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payout(available: f64, has_bank: bool, state: &str) -> PendingPayoutUser {
        PendingPayoutUser {
            id: 1,
            name: "Luis".to_string(),
            email: "luis@pololitos.cl".to_string(),
            phone: None,
            earnings_total: 0.0,
            earnings_last_30_days: 0.0,
            tier: "GOLD".to_string(),
            available_balance: available,
            pending_balance: 0.0,
            total_earnings: 0.0,
            total_withdrawn: 0.0,
            has_bank_account: has_bank,
            bank_account_holder: None,
            state: state.to_string(),
        }
    }

    #[test]
    fn test_payable_total_skips_unpayable() {
        let users = vec![
            payout(5000.0, true, "OK"),
            payout(3000.0, false, "OK"),
            payout(2000.0, true, "BLOCKED"),
            payout(1500.0, true, "OK"),
        ];
        assert_eq!(payable_total(&users), 6500.0);
    }
}
