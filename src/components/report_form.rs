//! Report Form Component
//!
//! Hosts the wizard: shows the current step view and follows the browser's
//! back action through `popstate`.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    ClientInfoStep, OperatorStep, RodentStep, ServiceStep, SignatureStep, StationsStep, SuccessStep,
};
use crate::context::WizardContext;
use crate::history::popped_step;
use crate::wizard::Step;

#[component]
pub fn ReportForm() -> impl IntoView {
    let wizard = WizardContext::new();
    provide_context(wizard);

    let handle = window_event_listener(ev::popstate, move |ev| {
        let state = popped_step(&ev);
        log::debug!("[Wizard] popstate {:?}", state);
        wizard.on_history_pop(state);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="report-form">
            <div class="step-progress">
                {move || {
                    let (index, total) = wizard.position.get();
                    format!("Step {} of {}: {}", index + 1, total, wizard.step.get().title())
                }}
            </div>
            {move || match wizard.step.get() {
                Step::User => view! { <OperatorStep /> }.into_any(),
                Step::ClientInfo => view! { <ClientInfoStep /> }.into_any(),
                Step::Stations => view! { <StationsStep /> }.into_any(),
                Step::Rodent => view! { <RodentStep /> }.into_any(),
                Step::Service => view! { <ServiceStep /> }.into_any(),
                Step::Signature => view! { <SignatureStep /> }.into_any(),
                Step::Success => view! { <SuccessStep /> }.into_any(),
            }}
        </div>
    }
}
