//! Report Session Store
//!
//! State of the report being filled in, shared by every wizard step.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Operator;
use crate::wizard::Sections;

/// In-progress report; nothing here is authoritative beyond this session
#[derive(Clone, Debug, Default, Store)]
pub struct ReportSession {
    /// Operator confirmed on the first step
    pub operator: Option<Operator>,
    /// Report created when Client Info was saved
    pub report_id: Option<String>,
    /// Sections chosen on Client Info
    pub sections: Sections,
}

/// Type alias for the store
pub type SessionStore = Store<ReportSession>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_operator(store: &SessionStore, operator: Operator) {
    store.operator().set(Some(operator));
}

/// Record the report created for the chosen sections
pub fn store_start_report(store: &SessionStore, report_id: String, sections: Sections) {
    store.report_id().set(Some(report_id));
    store.sections().set(sections);
}

/// Report id for child records; empty only if a step is reached out of order
pub fn store_report_id(store: &SessionStore) -> String {
    store.report_id().get_untracked().unwrap_or_default()
}

/// CPO number of the confirmed operator, empty if none
pub fn store_operator_cpo(store: &SessionStore) -> String {
    store
        .operator()
        .get_untracked()
        .map(|o| o.cpo_no)
        .unwrap_or_default()
}
