//! Report DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use infra_db::CheckoutRecord;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub checkouts: Vec<CheckoutRecord>,
}
