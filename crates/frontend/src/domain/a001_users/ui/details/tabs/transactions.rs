//! Transactions tab

use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use super::super::view_model::UserDetailsVm;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::table::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_datetime;
use crate::shared::load_state::LoadState;

#[component]
pub fn TransactionsTab(vm: UserDetailsVm) -> impl IntoView {
    move || match vm.transactions.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
        LoadState::Failed { message, recoverable } => view! {
            <ErrorState
                message=message
                on_retry=recoverable.then(|| Callback::new(move |_| vm.load_transactions()))
            />
        }
        .into_any(),
        LoadState::Ready(txs) if txs.is_empty() => {
            view! { <div class="empty-state">"Sin transacciones"</div> }.into_any()
        }
        LoadState::Ready(txs) => view! {
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Tarea"</TableHeaderCell>
                        <TableHeaderCell>"Bruto"</TableHeaderCell>
                        <TableHeaderCell>"Comisión"</TableHeaderCell>
                        <TableHeaderCell>"Neto"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {txs.into_iter().map(|tx| {
                        let id = format!("#{}", tx.id);
                        let kind = tx.type_label().to_string();
                        let task = tx.task_title.clone().unwrap_or_else(|| "—".to_string());
                        let status = tx.status_label().to_string();
                        let created = format_datetime(&tx.created_at);
                        view! {
                            <TableRow>
                                <TableCell>{id}</TableCell>
                                <TableCell>{kind}</TableCell>
                                <TableCell>{task}</TableCell>
                                <TableCellMoney value=tx.gross_amount color_by_sign=false />
                                <TableCellMoney value=tx.platform_fee color_by_sign=false />
                                <TableCellMoney value=tx.net_amount bold=true />
                                <TableCell>{status}</TableCell>
                                <TableCell>{created}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        }
        .into_any(),
    }
}
