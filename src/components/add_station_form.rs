//! Add Station Form Component
//!
//! Dialog for recording one bait station. Poison fields only apply to an
//! accessible station; an inaccessible one only needs a reason.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{PoisonType, QTY_UNITS, STATION_REMARKS};
use crate::components::LoadingIndicator;
use crate::forms::StationDraft;
use crate::notify::use_notifier;

#[component]
pub fn AddStationForm(
    #[prop(into)] report_id: String,
    /// Whether new stations default to the outside tab
    outside: bool,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifier();
    let fresh = move || StationDraft {
        is_outside: outside,
        ..StationDraft::default()
    };
    let (draft, set_draft) = signal(fresh());
    let (saving, set_saving) = signal(false);
    let report_id = StoredValue::new(report_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let args = match draft.with_untracked(|d| d.validate(&report_id.get_value())) {
            Ok(args) => args,
            Err(e) => {
                notifier.show(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_station(&args).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("[Stations] Saved station {}", args.station_no);
                    notifier.show("Station saved.");
                    set_draft.set(fresh());
                    on_saved.run(());
                }
                Err(e) => notifier.error("Stations", &e),
            }
        });
    };

    let accessible = move || draft.with(|d| d.is_accessible);
    let poison_type = move || draft.with(|d| d.poison_type);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog step-form" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h3>"Add Station"</h3>

                <label class="field">
                    <span>"Station number"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || draft.with(|d| d.station_no.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.station_no = value);
                        }
                    />
                </label>

                <label class="field">
                    <span>"Location"</span>
                    <select
                        prop:value=move || if draft.with(|d| d.is_outside) { "outside" } else { "inside" }
                        on:change=move |ev| {
                            let outside = event_target_value(&ev) == "outside";
                            set_draft.update(|d| d.is_outside = outside);
                        }
                    >
                        <option value="inside">"Inside"</option>
                        <option value="outside">"Outside"</option>
                    </select>
                </label>

                <label class="field">
                    <span>"Accessible"</span>
                    <select
                        prop:value=move || if accessible() { "true" } else { "false" }
                        on:change=move |ev| {
                            let value = event_target_value(&ev) == "true";
                            set_draft.update(|d| d.is_accessible = value);
                        }
                    >
                        <option value="true">"Yes"</option>
                        <option value="false">"No"</option>
                    </select>
                </label>

                <Show
                    when=accessible
                    fallback=move || view! {
                        <label class="field">
                            <span>"Reason"</span>
                            <textarea
                                placeholder="Why could the station not be reached?"
                                prop:value=move || draft.with(|d| d.accessible_reason.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.accessible_reason = value);
                                }
                            ></textarea>
                        </label>
                    }
                >
                    <label class="field">
                        <span>"Activity"</span>
                        <select
                            prop:value=move || if draft.with(|d| d.activity) { "1" } else { "0" }
                            on:change=move |ev| {
                                let active = event_target_value(&ev) == "1";
                                set_draft.update(|d| d.activity = active);
                            }
                        >
                            <option value="0">"No"</option>
                            <option value="1">"Yes"</option>
                        </select>
                    </label>

                    <label class="field">
                        <span>"Remark"</span>
                        <select
                            prop:value=move || draft.with(|d| d.remark.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.remark = value);
                            }
                        >
                            <option value="">"Select remark"</option>
                            {STATION_REMARKS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="field">
                        <span>"Poison type"</span>
                        <select
                            prop:value=move || poison_type().map(PoisonType::as_str).unwrap_or("")
                            on:change=move |ev| {
                                let selected = PoisonType::parse(&event_target_value(&ev));
                                set_draft.update(|d| d.select_poison_type(selected));
                            }
                        >
                            <option value="">"Select type"</option>
                            {PoisonType::ALL.iter().map(|t| view! {
                                <option value=t.as_str()>{t.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    {move || match poison_type() {
                        Some(PoisonType::Other) => view! {
                            <label class="field">
                                <span>"Product"</span>
                                <input
                                    type="text"
                                    placeholder="Product name"
                                    prop:value=move || draft.with(|d| d.other.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_draft.update(|d| d.other = value);
                                    }
                                />
                            </label>
                        }.into_any(),
                        Some(kind) => view! {
                            <label class="field">
                                <span>"Product"</span>
                                <select
                                    prop:value=move || draft.with(|d| d.product.clone())
                                    on:change=move |ev| {
                                        let title = event_target_value(&ev);
                                        set_draft.update(|d| d.select_product(&title));
                                    }
                                >
                                    <option value="">"Select product"</option>
                                    {kind.products().iter().map(|p| view! {
                                        <option value=p.title>{p.title}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        }.into_any(),
                        None => ().into_any(),
                    }}

                    <div class="field-row">
                        <label class="field">
                            <span>"Quantity"</span>
                            <input
                                type="number"
                                min="0"
                                step="any"
                                prop:value=move || draft.with(|d| d.qty.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.qty = value);
                                }
                            />
                        </label>
                        <label class="field">
                            <span>"Unit"</span>
                            <select
                                prop:value=move || draft.with(|d| d.qty_unit.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.qty_unit = value);
                                }
                            >
                                {QTY_UNITS.iter().map(|unit| view! {
                                    <option value=*unit>{*unit}</option>
                                }).collect_view()}
                            </select>
                        </label>
                    </div>

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
                            prop:value=move || draft.with(|d| d.batch_no.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.batch_no = value);
                            }
                        />
                    </label>
                </Show>

                <LoadingIndicator when=saving />
                <div class="dialog-actions">
                    <button type="button" class="ghost-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        "Save station"
                    </button>
                </div>
            </form>
        </div>
    }
}
