use contracts::dashboards::d400_overview::{ActivityItem, DashboardStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

use crate::dashboards::d400_overview::api;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::date_utils::relative_time;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_api;

/// Shortcuts rendered under the activity feed: (href, icon, label)
const QUICK_LINKS: [(&str, &str, &str); 4] = [
    ("/users", "users", "Gestionar usuarios"),
    ("/verification", "shield", "Revisar verificaciones"),
    ("/support", "message", "Atender tickets"),
    ("/transactions", "dollar", "Ver transacciones"),
];

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let stats = RwSignal::new(LoadState::<DashboardStats>::Idle);

    let load = move || {
        let client = api.get_value();
        stats.set(LoadState::Loading);
        spawn_local(async move {
            stats.set(LoadState::from_result(api::get_stats(&client).await));
        });
    };

    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"Panel de administración"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || stats.with(|s| s.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match stats.get() {
                    LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                    LoadState::Failed { message, recoverable } => view! {
                        <ErrorState
                            message=message
                            on_retry=recoverable.then(|| Callback::new(move |_| load()))
                        />
                    }
                    .into_any(),
                    LoadState::Ready(data) => view! { <Overview stats=data /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn Overview(stats: DashboardStats) -> impl IntoView {
    let trends = stats.trends;
    let attention = stats.pending_verifications + stats.open_tickets;

    view! {
        <div class="stat-grid">
            <StatCard
                label="Usuarios totales"
                icon_name="users"
                value=format_count(stats.total_users)
                change_percent=Some(trends.users)
                subtitle=Some("respecto al período anterior".to_string())
            />
            <StatCard
                label="Tareas activas"
                icon_name="clipboard"
                value=format_count(stats.total_tasks)
                change_percent=Some(trends.tasks)
            />
            <StatCard
                label="Ingresos totales"
                icon_name="dollar"
                value=format_clp(stats.total_revenue)
                tone=CardTone::Success
                change_percent=Some(trends.revenue)
            />
            <StatCard
                label="Requieren atención"
                icon_name="alert"
                value=format_count(attention)
                tone={if attention > 0 { CardTone::Warning } else { CardTone::Neutral }}
                subtitle=Some(format!(
                    "{} verificaciones · {} tickets abiertos",
                    stats.pending_verifications, stats.open_tickets
                ))
            />
        </div>

        <div class="dashboard__columns">
            <section class="card">
                <h2 class="card__title">"Actividad reciente"</h2>
                <ActivityFeed items=stats.recent_activity />
            </section>
            <section class="card">
                <h2 class="card__title">"Acciones rápidas"</h2>
                <div class="quick-actions">
                    {QUICK_LINKS
                        .into_iter()
                        .map(|(href, icon_name, label)| view! {
                            <A href=href attr:class="quick-actions__link">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn ActivityFeed(items: Vec<ActivityItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <div class="empty-state">"Sin actividad reciente"</div> }.into_any();
    }

    view! {
        <ul class="activity-feed">
            {items
                .into_iter()
                .map(|item| view! {
                    <li class="activity-feed__item">
                        <span class="activity-feed__icon">{icon(item.kind.icon())}</span>
                        <div class="activity-feed__body">
                            <p>{item.description.clone()}</p>
                            <span class="activity-feed__time">{relative_time(&item.timestamp)}</span>
                        </div>
                        {item.user_id.map(|id| view! {
                            <A href=format!("/users/{}", id) attr:class="activity-feed__link">"Ver usuario"</A>
                        })}
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
