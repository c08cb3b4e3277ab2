//! KPS Portal Frontend App
//!
//! Root component: shared contexts, and the route tree for the viewport
//! (desktop admin or mobile portal) chosen once at startup.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{ClientsPage, ReportsPage, Sidebar};
use crate::config::{self, SettingsContext};
use crate::mobile::PortalRoutes;
use crate::notify::{Notifier, Toaster};
use crate::store::ReportSession;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(SettingsContext::init());
    provide_context(Notifier::new());
    provide_context(Store::new(ReportSession::default()));

    let desktop = config::is_desktop();
    log::info!("[App] Starting in {} layout", if desktop { "desktop" } else { "portal" });

    view! {
        <Router>
            {if desktop {
                view! { <DesktopRoutes /> }.into_any()
            } else {
                view! { <PortalRoutes /> }.into_any()
            }}
            <Toaster />
        </Router>
    }
}

#[component]
fn DesktopRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/admin" /> }>
            <ParentRoute path=path!("/admin") view=DesktopLayout>
                <Route path=path!("/") view=ReportsPage />
                <Route path=path!("/report") view=ReportsPage />
                <Route path=path!("/client") view=ClientsPage />
            </ParentRoute>
        </Routes>
    }
}

/// Sidebar plus the routed page
#[component]
fn DesktopLayout() -> impl IntoView {
    view! {
        <div class="desktop-layout">
            <Sidebar />
            <main class="desktop-content">
                <Outlet />
            </main>
        </div>
    }
}
