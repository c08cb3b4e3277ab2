//! Top Navigation Component
//!
//! Portal header with the page title, dark-mode toggle and a menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::SettingsContext;

#[component]
pub fn TopNav() -> impl IntoView {
    let settings = expect_context::<SettingsContext>();
    let (menu_open, set_menu_open) = signal(false);

    let dark = move || settings.settings.get().dark_mode;

    view! {
        <header class="top-nav">
            <span class="top-nav-title">"KPS Portal"</span>
            <div class="top-nav-controls">
                <button
                    type="button"
                    class="icon-btn"
                    title=move || if dark() { "Light mode" } else { "Dark mode" }
                    on:click=move |_| settings.toggle_dark_mode()
                >
                    {move || if dark() { "☀" } else { "☾" }}
                </button>
                <button
                    type="button"
                    class=move || if menu_open.get() { "icon-btn active" } else { "icon-btn" }
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="top-nav-menu" on:click=move |_| set_menu_open.set(false)>
                    <A href="/portal/form">"New report"</A>
                    <A href="/portal/report">"Reports"</A>
                    <A href="/portal/client">"Clients"</A>
                </nav>
            </Show>
        </header>
    }
}
