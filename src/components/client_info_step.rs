//! Client Info Step
//!
//! Starts the report. Saving creates the report on the backend and fixes
//! which of the remaining steps the wizard will visit.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BackButton, LoadingIndicator};
use crate::context::WizardContext;
use crate::debounce::use_debounced_lookup;
use crate::forms::ClientDraft;
use crate::notify::use_notifier;
use crate::store::{store_operator_cpo, store_start_report, use_session};

#[component]
pub fn ClientInfoStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();

    let today = Local::now().date_naive();
    let fresh = move || ClientDraft {
        date: today.format("%Y-%m-%d").to_string(),
        ..ClientDraft::default()
    };
    let (draft, set_draft) = signal(fresh());
    let (loading, set_loading) = signal(false);

    let email = Memo::new(move |_| draft.with(|d| d.email.clone()));
    use_debounced_lookup(
        email.into(),
        |email| async move { api::search_client(&email).await },
        move |found| set_draft.update(|d| d.apply_match(found)),
        set_loading,
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let operator = store_operator_cpo(&session);
        let today = Local::now().date_naive();
        let (args, sections) = match draft.with_untracked(|d| d.validate(&operator, today).map(|a| (a, d.sections()))) {
            Ok(valid) => valid,
            Err(e) => {
                notifier.show(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        spawn_local(async move {
            match api::save_client(&args).await {
                Ok(report_id) => {
                    log::info!("[ClientInfo] Started report {} ({:?})", report_id, sections);
                    set_loading.set(false);
                    if let Err(e) = wizard.apply_sections(sections) {
                        notifier.error("ClientInfo", &e);
                        return;
                    }
                    store_start_report(&session, report_id, sections);
                    set_draft.set(fresh());
                    wizard.advance();
                }
                Err(e) => {
                    set_loading.set(false);
                    notifier.error("ClientInfo", &e);
                }
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, get: fn(&ClientDraft) -> String, set: fn(&mut ClientDraft, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    placeholder=label
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <BackButton on_back=move |_| wizard.jump_to(0) />
        <form class="step-form" on:submit=on_submit>
            <h2>"Client Info"</h2>
            {text_field("Email", "email", |d| d.email.clone(), |d, v| d.email = v)}
            {text_field("Client name", "text", |d| d.name.clone(), |d, v| d.name = v)}
            {text_field("Contact number", "tel", |d| d.cell.clone(), |d, v| d.cell = v)}
            {text_field("Address", "text", |d| d.address.clone(), |d, v| d.address = v)}
            <label class="field">
                <span>"Date"</span>
                <input
                    type="date"
                    max=today.format("%Y-%m-%d").to_string()
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.date = value);
                    }
                />
            </label>
            <fieldset class="sections">
                <legend>"Report sections"</legend>
                <label class="check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.inspection)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_draft.update(|d| d.inspection = checked);
                        }
                    />
                    "Inspection"
                </label>
                <label class="check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.fumigation)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_draft.update(|d| d.fumigation = checked);
                        }
                    />
                    "Fumigation"
                </label>
            </fieldset>
            <LoadingIndicator when=loading />
            <button type="submit" class="primary-btn" disabled=move || loading.get()>
                "Next"
            </button>
        </form>
    }
}
