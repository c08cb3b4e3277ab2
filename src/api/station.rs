//! Station Commands
//!
//! Bait stations attached to a report.

use serde::Serialize;

use super::post;
use crate::error::ApiResult;
use crate::models::Station;

#[derive(Serialize)]
struct ReportIdArgs<'a> {
    report_id: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

/// Payload for `save_station`; accessible-only fields are `null` otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveStationArgs {
    pub report_id: String,
    pub station_no: u32,
    pub is_accessible: bool,
    pub accessible_reason: Option<String>,
    pub station_activity: Option<u8>,
    pub is_outside: bool,
    pub station_remark: Option<String>,
    pub station_poison_type: Option<String>,
    pub other: Option<String>,
    pub poison_selection: Option<String>,
    pub poison_qty: Option<f64>,
    pub qty_unit: Option<String>,
    pub station_l_no: Option<String>,
    pub station_batch_no: Option<String>,
}

pub async fn get_stations(report_id: &str) -> ApiResult<Vec<Station>> {
    post::<_, Vec<Station>>("get_stations", &ReportIdArgs { report_id }, "Error fetching stations.")
        .await?
        .into_data()
}

pub async fn save_station(args: &SaveStationArgs) -> ApiResult<()> {
    post::<_, serde_json::Value>("save_station", args, "Error saving station data.").await?;
    Ok(())
}

pub async fn delete_station(id: &str) -> ApiResult<()> {
    post::<_, serde_json::Value>("delete_station", &IdArgs { id }, "Error deleting station data.").await?;
    Ok(())
}
