//! Clients Page Component
//!
//! Infinite-scrolling list of the clients known to the portal.

use leptos::prelude::*;
use leptos_infinite::use_infinite_loader;

use crate::api;
use crate::components::LoadingIndicator;
use crate::models::Client;
use crate::notify::use_notifier;

/// First letter of the client name for the avatar
fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// `YYYY-MM-DD` part of a backend timestamp
fn since(created: &str) -> &str {
    created.split([' ', 'T']).next().unwrap_or(created)
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let notifier = use_notifier();
    let list = use_infinite_loader(
        |page| async move { api::get_clients(page).await.map_err(|e| e.to_string()) },
        Callback::new(move |message: String| notifier.show(message)),
    );

    view! {
        <section class="list-page">
            <h2>"Clients"</h2>
            <Show when=move || list.items.with(Vec::is_empty) && !list.loading.get() && !list.has_more.get()>
                <p class="empty-state">"No clients yet."</p>
            </Show>
            <ul class="card-list">
                <For
                    each=move || list.items.get()
                    key=|client| client.client_id.clone()
                    children=|client: Client| view! {
                        <li class="card client-card">
                            <div class="avatar">{initial(&client.client_name)}</div>
                            <div class="card-body">
                                <strong>{client.client_name.clone()}</strong>
                                <span class="muted">{client.client_address.clone()}</span>
                                <span class="muted">{format!("{} • {}", client.client_email, client.client_cell)}</span>
                                <span class="muted small">{format!("Since {}", since(&client.created))}</span>
                            </div>
                        </li>
                    }
                />
            </ul>
            <LoadingIndicator when=list.loading />
            <Show when=move || list.failed.get() && !list.loading.get()>
                <div class="list-retry">
                    <span class="muted">"Could not load more."</span>
                    <button type="button" class="ghost-btn" on:click=move |_| list.retry()>
                        "Retry"
                    </button>
                </div>
            </Show>
            <div node_ref=list.sentinel class="list-sentinel"></div>
        </section>
    }
}
