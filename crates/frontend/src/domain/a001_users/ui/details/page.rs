//! User details page (MVVM): profile header plus lazily loaded tabs

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, ButtonSize, Flex, FlexAlign, FlexGap};

use super::tabs::{ActivityTab, InfoTab, TasksTab, TransactionsTab, VerificationTab};
use super::view_model::UserDetailsVm;
use crate::shared::components::error_state::ErrorState;
use crate::shared::components::loading_state::LoadingState;
use crate::shared::components::ui::badge::{user_state_badge, Badge, BadgeVariant, SpecBadge};
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_api;

#[component]
pub fn UserDetails() -> impl IntoView {
    let params = use_params_map();
    let vm = UserDetailsVm::new(use_api());
    let invalid_id = RwSignal::new(false);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).and_then(|raw| raw.parse::<i64>().ok());
        match id {
            Some(id) => {
                invalid_id.set(false);
                vm.load(id);
            }
            None => invalid_id.set(true),
        }
    });

    Effect::new(move |_| {
        let _ = vm.user_id.get();
        let user_ready = vm.user.with(|u| u.ready().is_some());
        match vm.active_tab.get() {
            "tasks" if is_idle(vm.tasks) => vm.load_tasks(),
            "activity" if is_idle(vm.activity) => vm.load_activity(),
            "transactions" if is_idle(vm.transactions) => vm.load_transactions(),
            "verification" if user_ready && is_idle(vm.documents) => vm.load_documents(),
            _ => {}
        }
    });

    view! {
        <PageFrame page_id="a001_users--detail" category=PAGE_CAT_DETAIL>
            <Header vm=vm />

            <div class="page__content">
                {move || {
                    if invalid_id.get() {
                        return view! { <ErrorState message="Identificador de usuario inválido" /> }.into_any();
                    }
                    match vm.user.get() {
                        LoadState::Idle | LoadState::Loading => view! { <LoadingState /> }.into_any(),
                        LoadState::Failed { message, recoverable } => view! {
                            <ErrorState
                                message=message
                                on_retry=recoverable.then(|| Callback::new(move |_| vm.reload()))
                            />
                        }.into_any(),
                        LoadState::Ready(_) => view! {
                            <div class="tabs__content">
                                <TabBar vm=vm />
                                <TabContent vm=vm />
                            </div>
                        }.into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

fn is_idle<T: Send + Sync + 'static>(state: RwSignal<LoadState<T>>) -> bool {
    state.with_untracked(|s| matches!(s, LoadState::Idle))
}

#[component]
fn Header(vm: UserDetailsVm) -> impl IntoView {
    let name = vm.display_name();
    let user = vm.user;

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <A href="/users" attr:class="button button--icon" attr:title="Volver a usuarios">
                    {icon("chevron-left")}
                </A>
                <h1 class="page__title">{move || name.get()}</h1>
                {move || user.with(|u| u.ready().map(|u| {
                    let fully_verified = u.is_fully_verified();
                    view! {
                        <SpecBadge spec=user_state_badge(u.state) />
                        <Show when=move || fully_verified>
                            <Badge variant=BadgeVariant::Success>{icon("shield")}" Verificado"</Badge>
                        </Show>
                    }
                }))}
            </div>
            <div class="page__header-right">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reload()>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn TabButton(vm: UserDetailsVm, tab: &'static str, label: &'static str, icon_name: &'static str) -> impl IntoView {
    let active_tab = vm.active_tab;
    view! {
        <Button
            appearance=Signal::derive(move || if active_tab.get() == tab {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Subtle
            })
            size=ButtonSize::Small
            on_click=move |_| vm.set_tab(tab)
        >
            <span class="tab-icon">{icon(icon_name)}</span>
            {label}
        </Button>
    }
}

#[component]
fn TabBar(vm: UserDetailsVm) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="tab-bar">
            <TabButton vm=vm tab="info" label="Información" icon_name="users" />
            <TabButton vm=vm tab="tasks" label="Tareas" icon_name="clipboard" />
            <TabButton vm=vm tab="activity" label="Actividad" icon_name="activity" />
            <TabButton vm=vm tab="transactions" label="Transacciones" icon_name="dollar" />
            <TabButton vm=vm tab="verification" label="Verificación" icon_name="shield" />
        </Flex>
    }
}

#[component]
fn TabContent(vm: UserDetailsVm) -> impl IntoView {
    move || match vm.active_tab.get() {
        "tasks" => view! { <TasksTab vm=vm /> }.into_any(),
        "activity" => view! { <ActivityTab vm=vm /> }.into_any(),
        "transactions" => view! { <TransactionsTab vm=vm /> }.into_any(),
        "verification" => view! { <VerificationTab vm=vm /> }.into_any(),
        _ => view! { <InfoTab vm=vm /> }.into_any(),
    }
}
