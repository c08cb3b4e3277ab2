//! Service Record Commands
//!
//! Rodent control and fumigation records attached to a report.

use super::post;
use crate::error::ApiResult;
use crate::forms::{RodentRecord, ServiceRecord};

pub async fn save_rodent(record: &RodentRecord) -> ApiResult<()> {
    post::<_, serde_json::Value>("save_rodent", record, "Error saving rodent data.").await?;
    Ok(())
}

pub async fn save_service(record: &ServiceRecord) -> ApiResult<()> {
    post::<_, serde_json::Value>("save_service", record, "Error saving service data.").await?;
    Ok(())
}
