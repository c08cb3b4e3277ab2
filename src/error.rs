//! Error Types
//!
//! Failures surfaced by backend calls, local form validation and the wizard.
//! None of these escape the component that caused them; they end up as a toast.

use thiserror::Error;

/// Result alias for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Backend call failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Unexpected response format from server")]
    ContentType(Option<String>),

    #[error("{0}")]
    Rejected(String),

    #[error("Could not read server response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Local validation failures, phrased for the operator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("All fields are required.")]
    Incomplete,

    #[error("Select at least one report section.")]
    NoSections,

    #[error("Operator details are missing. Go back and enter your PCO number.")]
    NoOperator,

    #[error("Report date cannot be in the future.")]
    FutureDate,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Please provide a signature before saving.")]
    EmptySignature,

    #[error("Signature image is not a valid PNG.")]
    InvalidSignature,
}

/// Step-sequence failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("At least one of inspection or fumigation must be selected")]
    NoSections,
}

impl From<WizardError> for ValidationError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::NoSections => ValidationError::NoSections,
        }
    }
}
