//! Fumigation Service Step
//!
//! Treated areas, target pests, and the chemical used. Choosing a catalog
//! chemical fills in its L number.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{OTHER, SERVICE_CHEMICALS, TARGET_PESTS, TREATED_AREAS};
use crate::components::{BackButton, LoadingIndicator};
use crate::context::WizardContext;
use crate::forms::ServiceDraft;
use crate::notify::use_notifier;
use crate::store::{store_report_id, use_session};

#[component]
pub fn ServiceStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();

    let (draft, set_draft) = signal(ServiceDraft::default());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let record = match draft.with_untracked(|d| d.validate(&store_report_id(&session))) {
            Ok(record) => record,
            Err(e) => {
                notifier.show(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_service(&record).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.show("Service data saved successfully.");
                    set_draft.set(ServiceDraft::default());
                    wizard.advance();
                }
                Err(e) => notifier.error("Service", &e),
            }
        });
    };

    view! {
        <BackButton on_back=move |_| wizard.retreat() />
        <form class="step-form" on:submit=on_submit>
            <h2>"Fumigation Service"</h2>

            <fieldset class="checklist">
                <legend>"Areas treated"</legend>
                {TREATED_AREAS.iter().map(|(field, label)| {
                    let field = *field;
                    view! {
                        <label class="check">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.areas.contains(field))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_draft.update(|d| d.toggle_area(field, checked));
                                }
                            />
                            {*label}
                        </label>
                    }
                }).collect_view()}
                <input
                    type="text"
                    placeholder="Other areas"
                    prop:value=move || draft.with(|d| d.area_other.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.area_other = value);
                    }
                />
            </fieldset>

            <fieldset class="checklist">
                <legend>"Treated for"</legend>
                {TARGET_PESTS.iter().map(|(field, label)| {
                    let field = *field;
                    view! {
                        <label class="check">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.pests.contains(field))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_draft.update(|d| d.toggle_pest(field, checked));
                                }
                            />
                            {*label}
                        </label>
                    }
                }).collect_view()}
                <input
                    type="text"
                    placeholder="Other pests"
                    prop:value=move || draft.with(|d| d.for_other.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.for_other = value);
                    }
                />
            </fieldset>

            <label class="field">
                <span>"Chemical"</span>
                <select
                    prop:value=move || draft.with(|d| d.chemical_selection.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.select_chemical(&value));
                    }
                >
                    <option value="">"Select chemical"</option>
                    {SERVICE_CHEMICALS.iter().map(|c| view! {
                        <option value=c.title>{format!("{} ({})", c.title, c.l_number)}</option>
                    }).collect_view()}
                    <option value=OTHER>"Other"</option>
                </select>
            </label>

            <Show when=move || draft.with(|d| d.chemical_selection == OTHER)>
                <label class="field">
                    <span>"Other chemical"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.other_chemical.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.other_chemical = value);
                        }
                    />
                </label>
            </Show>

            <label class="field">
                <span>"L number"</span>
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.l_number.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.l_number = value);
                    }
                />
            </label>

            <label class="field">
                <span>"Batch number"</span>
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.batch_number.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.batch_number = value);
                    }
                />
            </label>

            <label class="field">
                <span>"Remarks"</span>
                <textarea
                    prop:value=move || draft.with(|d| d.remarks.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.remarks = value);
                    }
                ></textarea>
            </label>

            <LoadingIndicator when=saving />
            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                "Next"
            </button>
        </form>
    }
}
