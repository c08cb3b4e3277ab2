//! Operator Step
//!
//! First wizard step. The PCO number is looked up as the operator types;
//! a known operator's name and cell are filled in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadingIndicator;
use crate::context::WizardContext;
use crate::debounce::use_debounced_lookup;
use crate::forms::OperatorDraft;
use crate::notify::use_notifier;
use crate::store::{store_set_operator, use_session, ReportSessionStoreFields};

#[component]
pub fn OperatorStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();

    // Returning to this step shows the operator already confirmed
    let initial = session
        .operator()
        .get_untracked()
        .map(|o| OperatorDraft {
            cpo: o.cpo_no,
            name: o.username,
            cell: o.user_cell,
        })
        .unwrap_or_default();
    let (draft, set_draft) = signal(initial);
    let (loading, set_loading) = signal(false);

    let cpo = Memo::new(move |_| draft.with(|d| d.cpo.clone()));
    use_debounced_lookup(
        cpo.into(),
        |cpo| async move { api::search_user(&cpo).await },
        move |found| set_draft.update(|d| d.apply_match(found)),
        set_loading,
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let args = match draft.with_untracked(OperatorDraft::validate) {
            Ok(args) => args,
            Err(e) => {
                notifier.show(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        spawn_local(async move {
            match api::save_user(&args).await {
                Ok(operator) => {
                    log::info!("[Operator] Saved operator {}", operator.cpo_no);
                    store_set_operator(&session, operator);
                    set_loading.set(false);
                    set_draft.set(OperatorDraft::default());
                    wizard.advance();
                }
                Err(e) => {
                    set_loading.set(false);
                    notifier.error("Operator", &e);
                }
            }
        });
    };

    view! {
        <form class="step-form" on:submit=on_submit>
            <h2>"Operator Info"</h2>
            <label class="field">
                <span>"PCO number"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="PCO number"
                    prop:value=move || draft.with(|d| d.cpo.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.cpo = value);
                    }
                />
            </label>
            <label class="field">
                <span>"Name"</span>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.name = value);
                    }
                />
            </label>
            <label class="field">
                <span>"Contact number"</span>
                <input
                    type="tel"
                    placeholder="Cell number"
                    prop:value=move || draft.with(|d| d.cell.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.cell = value);
                    }
                />
            </label>
            <LoadingIndicator when=loading />
            <button type="submit" class="primary-btn" disabled=move || loading.get()>
                "Next"
            </button>
        </form>
    }
}
