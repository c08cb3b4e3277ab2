use leptos::prelude::*;

/// "Back" link at the top of a step
#[component]
pub fn BackButton(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="step-back">
            <button type="button" class="ghost-btn" on:click=move |_| on_back.run(())>
                "← Back"
            </button>
        </div>
    }
}
