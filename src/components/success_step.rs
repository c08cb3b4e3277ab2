use leptos::prelude::*;

use crate::context::WizardContext;

/// Final step; the only way on is a new report
#[component]
pub fn SuccessStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();

    view! {
        <div class="step-form success">
            <div class="success-icon">"✓"</div>
            <h2>"Report submitted"</h2>
            <p class="muted">"The report has been saved and is available under Reports."</p>
            <button type="button" class="primary-btn" on:click=move |_| wizard.jump_to(0)>
                "Start a new report"
            </button>
        </div>
    }
}
