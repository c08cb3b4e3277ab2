//! Operator Commands
//!
//! Lookup and registration of the operator by PCO number.

use serde::Serialize;

use super::post;
use crate::error::{ApiError, ApiResult};
use crate::models::Operator;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SearchUserArgs<'a> {
    user_cpo: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveUserArgs {
    pub user_cpo: String,
    pub user_name: String,
    pub user_cell: String,
}

// ========================
// Commands
// ========================

/// First operator registered under `cpo`, if any
pub async fn search_user(cpo: &str) -> ApiResult<Option<Operator>> {
    let envelope = post::<_, Vec<Operator>>("search_user", &SearchUserArgs { user_cpo: cpo }, "Operator lookup failed.").await?;
    Ok(envelope.data.unwrap_or_default().into_iter().next())
}

/// Create or update the operator; returns the stored record
pub async fn save_user(args: &SaveUserArgs) -> ApiResult<Operator> {
    post::<_, Vec<Operator>>("save_user", args, "Error saving operator.")
        .await?
        .into_data()?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("save_user returned no operator".to_string()))
}
