//! Portal API Gateway
//!
//! Frontend bindings to the portal backend, organized by domain.
//! Every endpoint is a JSON `POST` answering with
//! `{ success, data?, error? }`.

mod operator;
mod client;
mod station;
mod service;
mod signature;
mod listing;
mod report;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::models::de_opt_text;

// Re-export all public items
pub use operator::*;
pub use client::*;
pub use station::*;
pub use service::*;
pub use signature::*;
pub use listing::*;
pub use report::*;

/// Response envelope shared by all JSON endpoints
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// Only `save_client` sets this
    #[serde(default, deserialize_with = "de_opt_text")]
    pub report_id: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> ApiResult<T> {
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }
}

/// Classify a raw response.
///
/// Checks run in order: HTTP status, JSON content type, envelope shape, and
/// finally the `success` flag. `fallback` is the message used when the
/// backend rejects without saying why.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
    fallback: &str,
) -> ApiResult<Envelope<T>> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    if !content_type.is_some_and(|ct| ct.contains("application/json")) {
        return Err(ApiError::ContentType(content_type.map(str::to_string)));
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    if !envelope.success {
        let message = envelope
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Rejected(message));
    }
    Ok(envelope)
}

async fn send<A: Serialize + ?Sized>(endpoint: &str, args: &A) -> ApiResult<reqwest::Response> {
    let url = config::endpoint_url(config::api_base(), endpoint);
    log::debug!("[API] POST {}", endpoint);
    let response = reqwest::Client::new().post(&url).json(args).send().await?;
    Ok(response)
}

/// POST `args` to `endpoint` and decode the envelope
pub(crate) async fn post<A, T>(endpoint: &str, args: &A, fallback: &str) -> ApiResult<Envelope<T>>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = send(endpoint, args).await?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;

    decode_envelope(status, content_type.as_deref(), &body, fallback).inspect_err(|e| {
        log::warn!("[API] {} failed: {}", endpoint, e);
    })
}

/// POST and return the raw body, for binary downloads
pub(crate) async fn post_bytes<A: Serialize + ?Sized>(endpoint: &str, args: &A) -> ApiResult<Vec<u8>> {
    let response = send(endpoint, args).await?;
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        log::warn!("[API] {} failed with status {}", endpoint, status);
        return Err(ApiError::Status(status));
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Station};

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_non_success_status() {
        let result = decode_envelope::<serde_json::Value>(500, JSON, b"{}", "x");
        assert_eq!(result.unwrap_err(), ApiError::Status(500));
    }

    #[test]
    fn test_html_body_is_content_type_error() {
        let result = decode_envelope::<serde_json::Value>(200, Some("text/html"), b"<html>", "x");
        assert_eq!(result.unwrap_err(), ApiError::ContentType(Some("text/html".to_string())));

        let result = decode_envelope::<serde_json::Value>(200, None, b"{}", "x");
        assert_eq!(result.unwrap_err(), ApiError::ContentType(None));
    }

    #[test]
    fn test_rejection_carries_backend_message() {
        let body = br#"{"success": false, "error": "Duplicate station number"}"#;
        let result = decode_envelope::<serde_json::Value>(200, JSON, body, "Error saving station data.");
        assert_eq!(result.unwrap_err(), ApiError::Rejected("Duplicate station number".to_string()));
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let body = br#"{"success": false, "error": ""}"#;
        let result = decode_envelope::<serde_json::Value>(200, JSON, body, "Error saving rodent data.");
        assert_eq!(result.unwrap_err().to_string(), "Error saving rodent data.");
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let result = decode_envelope::<serde_json::Value>(200, JSON, b"{not json", "x");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_typed_data() {
        let body = br#"{"success": true, "data": [{"id": 1, "station_no": 3, "is_outside": 0}]}"#;
        let stations = decode_envelope::<Vec<Station>>(200, JSON, body, "x")
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station_no, "3");
        assert!(!stations[0].is_outside);
    }

    #[test]
    fn test_missing_data_on_success() {
        let envelope = decode_envelope::<Vec<Station>>(200, JSON, br#"{"success": true}"#, "x").unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_single_row_data_without_default() {
        let body = br#"{"success": true, "data": {"client_id": 7, "client_name": "Spar"}}"#;
        let client = decode_envelope::<Client>(200, JSON, body, "x").unwrap().into_data().unwrap();
        assert_eq!(client.client_id, "7");

        let envelope = decode_envelope::<Client>(200, JSON, br#"{"success": true}"#, "x").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_top_level_report_id() {
        let body = br#"{"success": true, "report_id": 88}"#;
        let envelope = decode_envelope::<serde_json::Value>(200, JSON, body, "x").unwrap();
        assert_eq!(envelope.report_id.as_deref(), Some("88"));
    }
}
