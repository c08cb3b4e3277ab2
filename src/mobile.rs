//! Portal (Mobile) Layout
//!
//! Field-operator routes: the report wizard plus the report and client lists,
//! framed by a top bar and a bottom tab bar.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

use crate::components::{BottomNav, ClientsPage, ReportForm, ReportsPage, TopNav};

#[component]
pub fn PortalRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/portal/form" /> }>
            <Route path=path!("/") view=|| view! { <Redirect path="/portal/form" /> } />
            <ParentRoute path=path!("/portal") view=PortalLayout>
                <Route path=path!("/") view=|| view! { <Redirect path="/portal/form" /> } />
                <Route path=path!("/form") view=ReportForm />
                <Route path=path!("/report") view=ReportsPage />
                <Route path=path!("/client") view=ClientsPage />
            </ParentRoute>
        </Routes>
    }
}

#[component]
fn PortalLayout() -> impl IntoView {
    view! {
        <div class="portal-layout" style="display: flex; flex-direction: column; min-height: 100vh;">
            <TopNav />
            // Main content area
            <main class="portal-content" style="flex: 1; overflow-y: auto; padding-bottom: 70px;">
                <Outlet />
            </main>
            <BottomNav />
        </div>
    }
}
