use leptos::prelude::*;

/// Non-blocking spinner shown while a request is in flight
#[component]
pub fn LoadingIndicator(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <div class="loading-indicator" aria-busy="true">
                <span class="spinner"></span>
            </div>
        </Show>
    }
}
