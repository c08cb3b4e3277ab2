//! Client Commands
//!
//! Client lookup by email and report creation.

use serde::Serialize;

use super::post;
use crate::error::{ApiError, ApiResult};
use crate::models::ClientMatch;

#[derive(Serialize)]
struct SearchClientArgs<'a> {
    client_email: &'a str,
}

/// Creates the report (and the client, if new)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveClientArgs {
    pub client_name: String,
    pub client_email: String,
    pub client_cell: String,
    pub client_address: String,
    pub user_id: String,
    /// `YYYY-MM-DD`
    pub report_date: String,
    pub form_inspection: bool,
    pub form_fumigation: bool,
}

pub async fn search_client(email: &str) -> ApiResult<Option<ClientMatch>> {
    let envelope = post::<_, Vec<ClientMatch>>("search_client", &SearchClientArgs { client_email: email }, "Client lookup failed.").await?;
    Ok(envelope.data.unwrap_or_default().into_iter().next())
}

/// Start a report; returns the new report id
pub async fn save_client(args: &SaveClientArgs) -> ApiResult<String> {
    post::<_, serde_json::Value>("save_client", args, "Error starting report.")
        .await?
        .report_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Decode("save_client returned no report_id".to_string()))
}
