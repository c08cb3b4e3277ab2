//! Signature Command

use serde::Serialize;

use super::post;
use crate::error::ApiResult;

#[derive(Serialize)]
struct SaveSignatureArgs<'a> {
    report_id: &'a str,
    /// Base64 PNG without the data-URL prefix
    signature: &'a str,
}

pub async fn save_signature(report_id: &str, signature: &str) -> ApiResult<()> {
    post::<_, serde_json::Value>(
        "save_signature",
        &SaveSignatureArgs { report_id, signature },
        "Error saving signature. Please try again",
    )
    .await?;
    Ok(())
}
