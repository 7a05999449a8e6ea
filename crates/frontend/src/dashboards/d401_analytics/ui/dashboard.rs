use contracts::dashboards::d401_analytics::{
    AnalyticsData, AnalyticsSummary, CategoryData, MonthlyData, DEFAULT_PERIOD_DAYS, PERIOD_OPTIONS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::dashboards::d401_analytics::api;
use crate::shared::components::bar_chart::{BarChart, BarDatum};
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count, format_percent};
use crate::shared::date_utils::format_month;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_api;

/// Percentage of verified users; `None` with no users.
pub fn verified_share(summary: &AnalyticsSummary) -> Option<f64> {
    (summary.total_users > 0)
        .then(|| summary.verified_users as f64 / summary.total_users as f64 * 100.0)
}

pub fn monthly_bars(series: &[MonthlyData], format: fn(f64) -> String) -> Vec<BarDatum> {
    series
        .iter()
        .map(|m| BarDatum {
            label: format_month(&m.month),
            value: m.value(),
            display: format(m.value()),
        })
        .collect()
}

/// Largest categories first
pub fn category_bars(categories: &[CategoryData]) -> Vec<BarDatum> {
    let mut sorted = categories.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
        .into_iter()
        .map(|c| BarDatum {
            display: format!("{} tareas", format_count(c.count)),
            value: c.count as f64,
            label: c.category,
        })
        .collect()
}

fn format_units(value: f64) -> String {
    format_count(value.max(0.0).round() as u64)
}

fn period_label(days: u32) -> String {
    if days == 365 {
        "Último año".to_string()
    } else {
        format!("Últimos {} días", days)
    }
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let seq = StoredValue::new(RequestSequence::new());
    let period = RwSignal::new(DEFAULT_PERIOD_DAYS);
    let data = RwSignal::new(LoadState::<AnalyticsData>::Idle);

    let load = move || {
        let days = period.get_untracked();
        let ticket = seq.with_value(|s| s.issue());
        let client = api.get_value();
        data.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_stats(&client, days).await;
            if ticket.is_current() {
                data.set(LoadState::from_result(result));
            }
        });
    };

    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("chart")}
                    <h1 class="page__title">"Analytics"</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="select"
                        prop:value=move || period.get().to_string()
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                                period.set(days);
                                load();
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
                        on_click=move |_| load()
                        disabled=Signal::derive(move || data.with(|d| d.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match data.get() {
                    LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                    LoadState::Failed { message, recoverable } => view! {
                        <ErrorState
                            message=message
                            on_retry=recoverable.then(|| Callback::new(move |_| load()))
                        />
                    }
                    .into_any(),
                    LoadState::Ready(analytics) => {
                        view! { <AnalyticsView analytics=analytics days=period.get_untracked() /> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn AnalyticsView(analytics: AnalyticsData, days: u32) -> impl IntoView {
    let summary = analytics.summary;
    let charts = analytics.charts;
    let verified = verified_share(&summary)
        .map(|pct| format!("{} del total", format_percent(pct)))
        .unwrap_or_else(|| "Sin usuarios".to_string());

    view! {
        <div class="stat-grid">
            <StatCard
                label="Total usuarios"
                icon_name="users"
                value=format_count(summary.total_users)
                subtitle=Some(format!("+{} nuevos ({} días)", format_count(summary.new_users), days))
            />
            <StatCard
                label="Usuarios verificados"
                icon_name="shield"
                value=format_count(summary.verified_users)
                subtitle=Some(verified)
            />
            <StatCard
                label="Tareas totales"
                icon_name="clipboard"
                value=format_count(summary.total_tasks)
                subtitle=Some(format!("+{} nuevas ({} días)", format_count(summary.new_tasks), days))
            />
            <StatCard
                label="Ingresos totales"
                icon_name="dollar"
                value=format_clp(summary.total_revenue)
                tone=CardTone::Success
                subtitle=Some(format!("{} ({} días)", format_clp(summary.period_revenue), days))
            />
            <StatCard
                label="Dinero en cuenta (no transferido)"
                icon_name="wallet"
                value=format_clp(summary.held_money)
                tone=CardTone::Warning
                subtitle=Some("Pagado, con tareas aún no completadas".to_string())
            />
        </div>

        <div class="chart-grid">
            <BarChart title="Usuarios registrados por mes" data=monthly_bars(&charts.monthly_users, format_units) />
            <BarChart title="Ingresos por mes" data=monthly_bars(&charts.monthly_revenue, format_clp) />
            <BarChart title="Tareas completadas por mes" data=monthly_bars(&charts.monthly_tasks, format_units) />
            <BarChart title="Tareas por categoría" data=category_bars(&charts.tasks_by_category) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_share() {
        let summary = AnalyticsSummary {
            total_users: 200,
            verified_users: 50,
            ..Default::default()
        };
        assert_eq!(verified_share(&summary), Some(25.0));
        assert_eq!(verified_share(&AnalyticsSummary::default()), None);
    }

    #[test]
    fn test_category_bars_sorted() {
        let bars = category_bars(&[
            CategoryData { category: "Jardinería".to_string(), count: 3 },
            CategoryData { category: "Limpieza".to_string(), count: 1200 },
        ]);
        assert_eq!(bars[0].label, "Limpieza");
        assert_eq!(bars[0].display, "1.200 tareas");
        assert_eq!(bars[1].value, 3.0);
    }

    #[test]
    fn test_monthly_bars() {
        let series = vec![MonthlyData {
            month: "2024-12".to_string(),
            users: None,
            revenue: Some(150000.0),
            tasks: None,
        }];
        let bars = monthly_bars(&series, format_clp);
        assert_eq!(bars[0].label, "dic 2024");
        assert_eq!(bars[0].display, "$150.000");
    }
}
