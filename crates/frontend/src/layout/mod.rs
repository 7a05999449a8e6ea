pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use global_context::use_global_context;
use left::Sidebar;
use top_header::TopHeader;

/// Frame of every signed-in page.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Outlet              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
