//! Tasks tab - tasks as client and as worker

use contracts::domain::a001_users::{TaskProgress, TaskRole, UserTask};
use contracts::shared::query::Choice;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use super::super::view_model::UserDetailsVm;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::date_utils::format_date;
use crate::shared::load_state::LoadState;

fn task_progress_label(task: &UserTask) -> &'static str {
    if task.is_completed() {
        TaskProgress::Completed.display_name()
    } else if task.is_cancelled() {
        TaskProgress::Cancelled.display_name()
    } else {
        TaskProgress::Active.display_name()
    }
}

#[component]
fn TaskTable(title: &'static str, tasks: Vec<UserTask>, as_worker: bool) -> impl IntoView {
    if tasks.is_empty() {
        return view! {
            <section class="card">
                <h3 class="card__title">{title}</h3>
                <p class="text-muted">"Sin tareas"</p>
            </section>
        }
        .into_any();
    }

    let count = tasks.len();
    view! {
        <section class="card">
            <h3 class="card__title">{format!("{} ({})", title, count)}</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Tarea"</TableHeaderCell>
                        <TableHeaderCell>{if as_worker { "Cliente" } else { "Trabajador" }}</TableHeaderCell>
                        <TableHeaderCell>"Presupuesto"</TableHeaderCell>
                        <TableHeaderCell>{if as_worker { "Ganado" } else { "Pago" }}</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                        <TableHeaderCell>"Creada"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {tasks.into_iter().map(|task| {
                        let counterpart = if as_worker { task.client_name.clone() } else { task.worker_name.clone() };
                        let amount = if as_worker {
                            task.earned_amount.or(task.net_amount).map(format_clp)
                        } else {
                            Some(task.payment_status.clone())
                        };
                        let counterpart = counterpart.unwrap_or_else(|| "—".to_string());
                        let amount = amount.unwrap_or_else(|| "—".to_string());
                        let budget = format_clp(task.budget);
                        let progress = task_progress_label(&task);
                        let created = format_date(&task.created_at);
                        let title = task.title;
                        view! {
                            <TableRow>
                                <TableCell>{title}</TableCell>
                                <TableCell>{counterpart}</TableCell>
                                <TableCell>{budget}</TableCell>
                                <TableCell>{amount}</TableCell>
                                <TableCell>{progress}</TableCell>
                                <TableCell>{created}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </section>
    }
    .into_any()
}

#[component]
pub fn TasksTab(vm: UserDetailsVm) -> impl IntoView {
    let stats = Signal::derive(move || {
        vm.tasks.with(|t| t.ready().map(|d| d.stats.clone()).unwrap_or_default())
    });

    view! {
        <div class="filter-panel-content filter-panel-content--inline">
            <div class="form-group">
                <label>"Rol"</label>
                <select
                    class="select"
                    prop:value=move || vm.task_role.get().code()
                    on:change=move |ev| {
                        vm.task_role.set(Choice::parse(&event_target_value(&ev), TaskRole::from_code));
                        vm.load_tasks();
                    }
                >
                    <option value="ALL">"Todos"</option>
                    <option value="client">{TaskRole::Client.display_name()}</option>
                    <option value="worker">{TaskRole::Worker.display_name()}</option>
                </select>
            </div>
            <div class="form-group">
                <label>"Estado"</label>
                <select
                    class="select"
                    prop:value=move || vm.task_status.get().code()
                    on:change=move |ev| {
                        vm.task_status.set(Choice::parse(&event_target_value(&ev), TaskProgress::from_code));
                        vm.load_tasks();
                    }
                >
                    <option value="ALL">"Todos"</option>
                    <option value="completed">{TaskProgress::Completed.display_name()}</option>
                    <option value="active">{TaskProgress::Active.display_name()}</option>
                    <option value="cancelled">{TaskProgress::Cancelled.display_name()}</option>
                </select>
            </div>
        </div>

        <div class="stat-grid">
            <StatCard
                label="Como cliente"
                icon_name="clipboard"
                value=Signal::derive(move || format_count(stats.get().total_as_client as u64))
                subtitle=Signal::derive(move || Some(format!("Gastado {}", format_clp(stats.get().total_spent_as_client))))
            />
            <StatCard
                label="Como trabajador"
                icon_name="users"
                value=Signal::derive(move || format_count(stats.get().total_as_worker as u64))
                subtitle=Signal::derive(move || {
                    let s = stats.get();
                    Some(format!("{} completadas, {} activas", s.completed_as_worker, s.active_as_worker))
                })
            />
            <StatCard
                label="Ganancias como trabajador"
                icon_name="dollar"
                tone=CardTone::Success
                value=Signal::derive(move || format_clp(stats.get().total_earnings_as_worker))
            />
            <StatCard
                label="Canceladas como cliente"
                icon_name="x"
                tone=CardTone::Warning
                value=Signal::derive(move || format_count(stats.get().cancelled_as_client as u64))
            />
        </div>

        {move || match vm.tasks.get() {
            LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
            LoadState::Failed { message, recoverable } => view! {
                <ErrorState
                    message=message
                    on_retry=recoverable.then(|| Callback::new(move |_| vm.load_tasks()))
                />
            }.into_any(),
            LoadState::Ready(data) => view! {
                <TaskTable title="Como cliente" tasks=data.as_client as_worker=false />
                <TaskTable title="Como trabajador" tasks=data.as_worker as_worker=true />
            }.into_any(),
        }}
    }
}
