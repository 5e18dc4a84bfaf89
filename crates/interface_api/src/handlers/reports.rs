//! Report handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use core_kernel::temporal::DayWindow;
use infra_db::{DailySummary, ReportsRepository};

use crate::dto::reports::{ExportQuery, ExportResponse};
use crate::error::ApiError;
use crate::AppState;

/// Today's operational numbers. "Today" starts at midnight in the
/// configured hostel timezone.
pub async fn daily_report(
    State(state): State<AppState>,
) -> Result<Json<DailySummary>, ApiError> {
    let today = DayWindow::today(state.config.timezone, Utc::now());
    let repository = ReportsRepository::new(state.pool.clone());
    let summary = repository.daily_summary(today).await?;
    Ok(Json(summary))
}

/// Checkout history for a bounded date range, newest first. Ranges over
/// the export limit are rejected before any query runs.
pub async fn export_checkouts(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Json<ExportResponse>, ApiError> {
    let window = DayWindow::export_range(state.config.timezone, query.from, query.to)?;
    let repository = ReportsRepository::new(state.pool.clone());
    let checkouts = repository.export_checkouts(window).await?;
    Ok(Json(ExportResponse { checkouts }))
}
