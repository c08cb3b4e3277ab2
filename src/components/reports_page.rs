//! Reports Page Component
//!
//! Infinite-scrolling list of submitted reports with PDF download.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_infinite::use_infinite_loader;

use crate::api;
use crate::components::LoadingIndicator;
use crate::models::ReportSummary;
use crate::notify::use_notifier;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let notifier = use_notifier();
    let (downloading, set_downloading) = signal(None::<String>);
    let list = use_infinite_loader(
        |page| async move { api::get_reports(page).await.map_err(|e| e.to_string()) },
        Callback::new(move |message: String| notifier.show(message)),
    );

    let download = move |report_id: String| {
        if downloading.get_untracked().is_some() {
            return;
        }
        set_downloading.set(Some(report_id.clone()));
        spawn_local(async move {
            let result = match api::download_report(&report_id).await {
                Ok(bytes) => {
                    log::info!("[Reports] Downloaded report {} ({} bytes)", report_id, bytes.len());
                    api::save_pdf(&bytes, &api::report_file_name(&report_id))
                }
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                notifier.error("Reports", &e);
            }
            set_downloading.set(None);
        });
    };

    view! {
        <section class="list-page">
            <h2>"Reports"</h2>
            <Show when=move || list.items.with(Vec::is_empty) && !list.loading.get() && !list.has_more.get()>
                <p class="empty-state">"No reports yet."</p>
            </Show>
            <ul class="card-list">
                <For
                    each=move || list.items.get()
                    key=|report| report.report_id.clone()
                    children=move |report: ReportSummary| {
                        let id = report.report_id.clone();
                        let busy_id = id.clone();
                        view! {
                            <li class="card report-card">
                                <div class="card-body">
                                    <strong>{format!("Report #{}", report.report_id)}</strong>
                                    <span class="muted">{report.client_name.clone()}</span>
                                    <span class="muted small">
                                        {format!("{} • {}", report.report_date, report.report_status)}
                                    </span>
                                </div>
                                <button
                                    type="button"
                                    class="secondary-btn"
                                    disabled=move || downloading.get().is_some()
                                    on:click=move |_| download(id.clone())
                                >
                                    {move || if downloading.get().as_deref() == Some(busy_id.as_str()) {
                                        "Downloading…"
                                    } else {
                                        "Download"
                                    }}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <LoadingIndicator when=list.loading />
            <Show when=move || list.failed.get() && !list.loading.get()>
                <div class="list-retry">
                    <span class="muted">"Could not load more."</span>
                    <button type="button" class="ghost-btn" on:click=move |_| list.retry()>
                        "Retry"
                    </button>
                </div>
            </Show>
            <div node_ref=list.sentinel class="list-sentinel"></div>
        </section>
    }
}
