//! Desktop Sidebar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::SettingsContext;

/// Admin section for a path; `/admin` itself shows reports
pub fn admin_section(path: &str) -> Option<&'static str> {
    match path.trim_end_matches('/') {
        "/admin" | "/admin/report" => Some("/admin/report"),
        "/admin/client" => Some("/admin/client"),
        _ => None,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let settings = expect_context::<SettingsContext>();
    let location = use_location();
    let active = move || admin_section(&location.pathname.get());

    let link_class = move |href: &'static str| {
        move || if active() == Some(href) { "sidebar-link active" } else { "sidebar-link" }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"KPS Admin"</div>
            <nav class="sidebar-nav">
                <A href="/admin/report" attr:class=link_class("/admin/report")>"Reports"</A>
                <A href="/admin/client" attr:class=link_class("/admin/client")>"Clients"</A>
            </nav>
            <button
                type="button"
                class="sidebar-link"
                on:click=move |_| settings.toggle_dark_mode()
            >
                {move || if settings.settings.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
        </aside>
    }
}
