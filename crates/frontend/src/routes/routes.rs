use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::{AnalyticsDashboard, OverviewDashboard};
use crate::domain::a001_users::ui::details::UserDetails;
use crate::domain::a001_users::ui::list::UsersList;
use crate::domain::a002_support_tickets::ui::list::SupportTicketsList;
use crate::domain::a003_verification_documents::ui::list::VerificationList;
use crate::domain::a004_transactions::ui::list::TransactionsPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;

pub const HOME_PATH: &str = "/dashboard";

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireAdmin>
            <Shell />
        </RequireAdmin>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Página no encontrada"</h1>
            <a href=HOME_PATH>"Volver al panel"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=AdminArea>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("dashboard") view=OverviewDashboard />
                    <Route path=path!("users") view=UsersList />
                    <Route path=path!("users/:id") view=UserDetails />
                    <Route path=path!("verification") view=VerificationList />
                    <Route path=path!("support") view=SupportTicketsList />
                    <Route path=path!("transactions") view=TransactionsPage />
                    <Route path=path!("analytics") view=AnalyticsDashboard />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
