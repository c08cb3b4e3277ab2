//! Listing Commands
//!
//! Paginated client and report lists.

use leptos_infinite::PageRequest;
use serde::Serialize;

use super::post;
use crate::error::ApiResult;
use crate::models::{Client, ReportSummary};

#[derive(Serialize)]
struct PageArgs {
    limit: usize,
    offset: usize,
}

impl From<PageRequest> for PageArgs {
    fn from(page: PageRequest) -> Self {
        Self {
            limit: page.limit,
            offset: page.offset,
        }
    }
}

pub async fn get_clients(page: PageRequest) -> ApiResult<Vec<Client>> {
    post::<_, Vec<Client>>("get_clients", &PageArgs::from(page), "Error loading clients.")
        .await?
        .into_data()
}

pub async fn get_reports(page: PageRequest) -> ApiResult<Vec<ReportSummary>> {
    post::<_, Vec<ReportSummary>>("get_reports", &PageArgs::from(page), "Error fetching reports.")
        .await?
        .into_data()
}
