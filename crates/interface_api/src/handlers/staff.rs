//! Staff management handlers (admin only)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_staff::NewStaff;
use infra_db::{StaffRepository, StaffSummary};

use crate::dto::guests::DeleteResponse;
use crate::dto::staff::{CreateStaffBody, UpdatePasswordBody};
use crate::error::ApiError;
use crate::AppState;

pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffSummary>>, ApiError> {
    let repository = StaffRepository::new(state.pool.clone());
    let staff = repository.list().await?;
    Ok(Json(staff))
}

pub async fn create_staff(
    State(state): State<AppState>,
    Json(body): Json<CreateStaffBody>,
) -> Result<Json<StaffSummary>, ApiError> {
    body.validate()?;
    let staff = NewStaff {
        username: body.username,
        password: body.password,
        role: body.role.unwrap_or_default(),
    };

    let repository = StaffRepository::new(state.pool.clone());
    let created = repository.create(&staff).await?;
    Ok(Json(created))
}

pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePasswordBody>,
) -> Result<Json<DeleteResponse>, ApiError> {
    body.validate()?;
    let repository = StaffRepository::new(state.pool.clone());
    repository.update_password(id, &body.password).await?;
    Ok(Json(DeleteResponse { success: true }))
}

pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repository = StaffRepository::new(state.pool.clone());
    repository.delete(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
