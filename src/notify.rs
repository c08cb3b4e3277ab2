//! Toast Notifications
//!
//! Short-lived messages shown over the page. Every failure and save
//! confirmation in the UI ends up here.

use std::fmt::Display;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible
const TOAST_MILLIS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Toast queue provided at the app root
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();
        log::info!("[Toast] {}", message);
        self.set_toasts.update(|t| t.push(Toast { id, message }));

        let set_toasts = self.set_toasts;
        // Outlives the caller; the queue entry is removed by id
        let _ = Timeout::new(TOAST_MILLIS, move || {
            set_toasts.try_update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    }

    /// Log the failure and show it
    pub fn error(&self, context: &str, error: &impl Display) {
        log::warn!("[{}] {}", context, error);
        self.show(error.to_string());
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Renders the current toasts; mount once near the root
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| notifier.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
