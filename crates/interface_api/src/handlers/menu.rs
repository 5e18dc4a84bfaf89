//! Menu handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use domain_orders::{MenuItem, MenuItemPatch};
use infra_db::MenuRepository;

use crate::dto::guests::DeleteResponse;
use crate::dto::menu::{CreateMenuItemBody, UpdateMenuItemBody};
use crate::error::ApiError;
use crate::AppState;

/// The full menu, grouped by category.
pub async fn list_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let repository = MenuRepository::new(state.pool.clone());
    let items = repository.list().await?;
    Ok(Json(items))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MenuItem>, ApiError> {
    let repository = MenuRepository::new(state.pool.clone());
    let item = repository.find(id).await?;
    Ok(Json(item))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(body): Json<CreateMenuItemBody>,
) -> Result<Json<MenuItem>, ApiError> {
    body.validate()?;
    let repository = MenuRepository::new(state.pool.clone());
    let item = repository.create(&body.into()).await?;
    Ok(Json(item))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMenuItemBody>,
) -> Result<Json<MenuItem>, ApiError> {
    let patch: MenuItemPatch = body.into();
    let repository = MenuRepository::new(state.pool.clone());
    let item = repository.update(id, &patch).await?;
    Ok(Json(item))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repository = MenuRepository::new(state.pool.clone());
    repository.delete(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
