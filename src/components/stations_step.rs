//! Stations Step
//!
//! Lists the report's bait stations split into inside and outside tabs.
//! Adding or deleting a station refetches the whole list; neither moves the
//! wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddStationForm, BackButton, DeleteConfirmButton, LoadingIndicator};
use crate::context::WizardContext;
use crate::models::Station;
use crate::notify::use_notifier;
use crate::store::{store_report_id, use_session};

#[component]
pub fn StationsStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();
    let report_id = store_report_id(&session);

    let (stations, set_stations) = signal(Vec::<Station>::new());
    let (busy, set_busy) = signal(false);
    let (outside_tab, set_outside_tab) = signal(false);
    let (adding, set_adding) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load stations on mount and after every add/delete
    let fetch_id = report_id.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let report_id = fetch_id.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api::get_stations(&report_id).await {
                Ok(loaded) => {
                    log::debug!("[Stations] Loaded {} stations", loaded.len());
                    set_stations.set(loaded);
                }
                Err(e) => notifier.error("Stations", &e),
            }
            set_busy.set(false);
        });
    });
    let reload = move || set_reload_trigger.update(|n| *n += 1);

    let delete_station = move |id: String| {
        if busy.get_untracked() {
            log::debug!("[Stations] Ignoring delete while busy");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_station(&id).await {
                Ok(()) => {
                    log::info!("[Stations] Deleted station {}", id);
                    notifier.show("Station deleted.");
                    reload();
                }
                Err(e) => {
                    notifier.error("Stations", &e);
                    set_busy.set(false);
                }
            }
        });
    };

    let count = move |outside: bool| stations.with(|s| s.iter().filter(|st| st.is_outside == outside).count());
    let visible = move || {
        let outside = outside_tab.get();
        stations.with(|s| s.iter().filter(|st| st.is_outside == outside).cloned().collect::<Vec<_>>())
    };

    view! {
        <BackButton on_back=move |_| wizard.retreat() />
        <div class="step-form">
            <h2>"Stations"</h2>

            <div class="tab-bar">
                <button
                    type="button"
                    class=move || if outside_tab.get() { "tab" } else { "tab active" }
                    on:click=move |_| set_outside_tab.set(false)
                >
                    {move || format!("Inside ({})", count(false))}
                </button>
                <button
                    type="button"
                    class=move || if outside_tab.get() { "tab active" } else { "tab" }
                    on:click=move |_| set_outside_tab.set(true)
                >
                    {move || format!("Outside ({})", count(true))}
                </button>
            </div>

            <LoadingIndicator when=busy />

            <div class="station-list">
                <Show when=move || visible().is_empty() && !busy.get()>
                    <p class="empty-state">"No stations recorded yet."</p>
                </Show>
                <For
                    each=visible
                    key=|station| station.id.clone()
                    children=move |station| {
                        let id = station.id.clone();
                        view! {
                            <StationCard station=station>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    disabled=busy
                                    on_confirm=move |_| delete_station(id.clone())
                                />
                            </StationCard>
                        }
                    }
                />
            </div>

            <button type="button" class="secondary-btn" on:click=move |_| set_adding.set(true)>
                "+ Add station"
            </button>

            <div class="step-actions">
                <button type="button" class="primary-btn" disabled=move || busy.get() on:click=move |_| wizard.advance()>
                    "Next"
                </button>
            </div>
        </div>

        <Show when=move || adding.get()>
            <AddStationForm
                report_id=report_id.clone()
                outside=outside_tab.get_untracked()
                on_saved=move |_| {
                    set_adding.set(false);
                    reload();
                }
                on_close=move |_| set_adding.set(false)
            />
        </Show>
    }
}

/// One station summary
#[component]
fn StationCard(station: Station, children: Children) -> impl IntoView {
    let details = if station.is_accessible {
        let batch = station.station_batch_no.clone().filter(|b| !b.is_empty());
        view! {
            <dl class="station-details">
                <dt>"Batch"</dt>
                <dd>{batch.unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Activity"</dt>
                <dd>{if station.station_activity { "Yes" } else { "No" }}</dd>
                <dt>"Product"</dt>
                <dd>{station.product().unwrap_or("-").to_string()}</dd>
                <dt>"Remark"</dt>
                <dd>{station.station_remark.clone().unwrap_or_default()}</dd>
                <dt>"Quantity"</dt>
                <dd>{station.quantity_label().unwrap_or_else(|| "N/A".to_string())}</dd>
            </dl>
        }
        .into_any()
    } else {
        view! {
            <div class="station-details inaccessible">
                <p>"Station not accessible"</p>
                <p class="muted">{station.accessible_reason.clone().unwrap_or_default()}</p>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="station-card">
            <div class="station-card-header">
                <span class="station-no">{format!("Station {}", station.station_no)}</span>
                {children()}
            </div>
            {details}
        </div>
    }
}
