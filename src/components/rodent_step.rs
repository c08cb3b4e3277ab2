//! Rodent Control Step

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::RODENT_BATCH_PRODUCTS;
use crate::components::{BackButton, LoadingIndicator};
use crate::context::WizardContext;
use crate::forms::RodentDraft;
use crate::notify::use_notifier;
use crate::store::{store_report_id, use_session};

/// Replacement checklist and notes for the rodent section
#[component]
pub fn RodentStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();

    let (draft, set_draft) = signal(RodentDraft::default());
    let (saving, set_saving) = signal(false);
    let (show_batches, set_show_batches) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let record = draft.with_untracked(|d| d.record(&store_report_id(&session)));

        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_rodent(&record).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.show("Rodent data saved successfully.");
                    set_draft.set(RodentDraft::default());
                    wizard.advance();
                }
                Err(e) => notifier.error("Rodent", &e),
            }
        });
    };

    let checkbox = move |label: &'static str, get: fn(&RodentDraft) -> bool, set: fn(&mut RodentDraft, bool)| {
        view! {
            <label class="check">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(get)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_draft.update(|d| set(d, checked));
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <BackButton on_back=move |_| wizard.retreat() />
        <form class="step-form" on:submit=on_submit>
            <h2>"Rodent Control"</h2>

            <fieldset>
                <legend>"Replaced"</legend>
                {checkbox("Rodent box", |d| d.replaced_rodentbox, |d, v| d.replaced_rodentbox = v)}
                {checkbox("Warning sign", |d| d.replaced_warning_sign, |d, v| d.replaced_warning_sign = v)}
                {checkbox("Insect monitor", |d| d.replaced_insect, |d, v| d.replaced_insect = v)}
            </fieldset>

            <label class="field">
                <span>"Attention"</span>
                <textarea
                    placeholder="Points needing the client's attention"
                    prop:value=move || draft.with(|d| d.attention.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.attention = value);
                    }
                ></textarea>
            </label>

            <button type="button" class="ghost-btn" on:click=move |_| set_show_batches.update(|s| *s = !*s)>
                {move || if show_batches.get() { "Hide batch numbers" } else { "Product batch numbers" }}
            </button>
            <Show when=move || show_batches.get()>
                <fieldset>
                    <legend>"Batch numbers"</legend>
                    {RODENT_BATCH_PRODUCTS.iter().map(|(field, label)| {
                        let field = *field;
                        view! {
                            <label class="field">
                                <span>{*label}</span>
                                <input
                                    type="text"
                                    prop:value=move || draft.with(|d| d.batch(field))
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_draft.update(|d| d.set_batch(field, value));
                                    }
                                />
                            </label>
                        }
                    }).collect_view()}
                </fieldset>
            </Show>

            <LoadingIndicator when=saving />
            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                "Next"
            </button>
        </form>
    }
}
