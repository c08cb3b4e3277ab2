//! Bottom Navigation Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Portal tab for a path; `/portal` itself is the form
pub fn portal_tab(path: &str) -> Option<&'static str> {
    match path.trim_end_matches('/') {
        "" | "/portal" | "/portal/form" => Some("/portal/form"),
        "/portal/report" => Some("/portal/report"),
        "/portal/client" => Some("/portal/client"),
        _ => None,
    }
}

const TABS: &[(&str, &str, &str)] = &[
    ("/portal/form", "📝", "Form"),
    ("/portal/report", "📄", "Reports"),
    ("/portal/client", "👥", "Clients"),
];

#[component]
pub fn BottomNav() -> impl IntoView {
    let location = use_location();
    let active = move || portal_tab(&location.pathname.get());

    view! {
        <nav class="bottom-nav">
            {TABS.iter().map(|(href, icon, label)| {
                let href = *href;
                view! {
                    <A
                        href=href
                        attr:class=move || if active() == Some(href) { "bottom-nav-item active" } else { "bottom-nav-item" }
                    >
                        <div class="bottom-nav-icon">{*icon}</div>
                        <div class="bottom-nav-label">{*label}</div>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_root_counts_as_form() {
        assert_eq!(portal_tab("/portal"), Some("/portal/form"));
        assert_eq!(portal_tab("/portal/form/"), Some("/portal/form"));
        assert_eq!(portal_tab("/portal/report"), Some("/portal/report"));
        assert_eq!(portal_tab("/admin"), None);
    }
}
