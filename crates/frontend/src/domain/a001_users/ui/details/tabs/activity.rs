//! Activity tab - timeline of the last N days

use contracts::domain::a001_users::UserActivity;
use leptos::prelude::*;

use super::super::view_model::{UserDetailsVm, ACTIVITY_PERIODS};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::table::number_format::format_clp;
use crate::shared::date_utils::{format_datetime, relative_time};
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;

fn activity_icon(activity: &UserActivity) -> &'static str {
    match activity.activity_type.as_str() {
        "payment" | "transaction" => "dollar",
        "task" | "task_created" | "task_completed" => "clipboard",
        "offer" => "message",
        "tier_change" => "chart",
        _ => "activity",
    }
}

fn activity_text(activity: &UserActivity) -> String {
    if let Some(description) = activity.description.as_deref().filter(|d| !d.is_empty()) {
        return description.to_string();
    }
    match activity.task_title.as_deref() {
        Some(title) => format!("{}: {}", activity.activity_type, title),
        None => activity.activity_type.clone(),
    }
}

#[component]
pub fn ActivityTab(vm: UserDetailsVm) -> impl IntoView {
    view! {
        <div class="filter-panel-content filter-panel-content--inline">
            <div class="form-group">
                <label>"Periodo"</label>
                <select
                    class="select"
                    prop:value=move || vm.activity_days.get().to_string()
                    on:change=move |ev| {
                        if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                            vm.activity_days.set(days);
                            vm.load_activity();
                        }
                    }
                >
                    {ACTIVITY_PERIODS
                        .iter()
                        .map(|days| view! { <option value=days.to_string()>{format!("Últimos {} días", days)}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>

        {move || match vm.activity.get() {
            LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
            LoadState::Failed { message, recoverable } => view! {
                <ErrorState
                    message=message
                    on_retry=recoverable.then(|| Callback::new(move |_| vm.load_activity()))
                />
            }.into_any(),
            LoadState::Ready(response) if response.data.is_empty() => view! {
                <div class="empty-state">"Sin actividad en el periodo"</div>
            }.into_any(),
            LoadState::Ready(response) => view! {
                <ul class="activity-feed">
                    {response.data.into_iter().map(|activity| {
                        let amount = activity.amount.map(format_clp);
                        view! {
                            <li class="activity-feed__item">
                                <span class="activity-feed__icon">{icon(activity_icon(&activity))}</span>
                                <div class="activity-feed__body">
                                    <div class="activity-feed__text">{activity_text(&activity)}</div>
                                    <div class="activity-feed__meta" title=format_datetime(&activity.created_at)>
                                        {relative_time(&activity.created_at)}
                                        {activity.status.clone().map(|s| format!(" · {}", s))}
                                    </div>
                                </div>
                                {amount.map(|a| view! { <span class="activity-feed__amount">{a}</span> })}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any(),
        }}
    }
}
