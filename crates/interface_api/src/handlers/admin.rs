//! Administrative handlers

use axum::{extract::State, Json};
use serde::Serialize;

use infra_db::{MaintenanceRepository, ResetReport};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    pub report: ResetReport,
}

/// Wipes all guest and order data and resets every unit to AVAILABLE.
/// Irreversible; gated behind the ADMIN role.
pub async fn reset_data(State(state): State<AppState>) -> Result<Json<ResetResponse>, ApiError> {
    let repository = MaintenanceRepository::new(state.pool.clone());
    let report = repository.reset_guest_data().await?;
    Ok(Json(ResetResponse {
        success: true,
        message: "All guest and order data has been reset.".to_string(),
        report,
    }))
}
