//! Top bar: sidebar toggle, brand, signed-in administrator and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth_state = use_auth();
    let navigate = use_navigate();

    let logout = do_logout();

    let display_name = move || {
        auth_state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.name.clone())
                .or_else(|| s.staff.as_ref().map(|st| st.role.clone()))
                .unwrap_or_else(|| "Administrador".to_string())
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if ctx.left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"Pololitos Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{display_name}</span>
                </div>
                <button
                    class="top-header__icon-btn"
                    title="Cerrar sesión"
                    on:click=move |_| {
                        logout.run(());
                        navigate("/login", Default::default());
                    }
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
