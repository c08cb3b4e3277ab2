//! Report Download
//!
//! Fetches the generated PDF and hands it to the browser as a file download.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use super::post_bytes;
use crate::error::{ApiError, ApiResult};

#[derive(Serialize)]
struct ReportIdArgs<'a> {
    report_id: &'a str,
}

pub async fn download_report(report_id: &str) -> ApiResult<Vec<u8>> {
    post_bytes("download_report", &ReportIdArgs { report_id }).await
}

pub fn report_file_name(report_id: &str) -> String {
    format!("report_{}.pdf", report_id)
}

/// Offer `bytes` as a PDF download named `file_name`
pub fn save_pdf(bytes: &[u8], file_name: &str) -> ApiResult<()> {
    save_blob(bytes, file_name).map_err(|e| ApiError::Transport(format!("{:?}", e)))
}

fn save_blob(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
    }
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
