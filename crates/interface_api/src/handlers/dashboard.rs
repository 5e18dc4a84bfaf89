//! Dashboard handler

use axum::{extract::State, Json};

use infra_db::LodgingRepository;

use crate::dto::dashboard::DashboardResponse;
use crate::error::ApiError;
use crate::AppState;

/// Every room and dorm bed with its current occupant.
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let repository = LodgingRepository::new(state.pool.clone());
    let rooms = repository.rooms_with_guests().await?;
    let dorm_beds = repository.beds_with_guests().await?;
    Ok(Json(DashboardResponse { rooms, dorm_beds }))
}
