//! Form Drafts
//!
//! Local field state for each wizard step and the validation that turns it
//! into a backend payload. Nothing here talks to the backend.

mod operator;
mod client;
mod station;
mod rodent;
mod service;
mod signature;

pub use operator::OperatorDraft;
pub use client::ClientDraft;
pub use station::StationDraft;
pub use rodent::{RodentDraft, RodentRecord};
pub use service::{ServiceDraft, ServiceRecord};
pub use signature::signature_payload;

/// Trimmed copy, or `None` when blank
fn filled(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
