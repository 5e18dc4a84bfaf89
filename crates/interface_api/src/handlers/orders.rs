//! Food order handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use domain_orders::{FoodOrder, NewFoodOrder, OrderStatus};
use infra_db::{OrderRepository, OrderWithContext};

use crate::dto::guests::DeleteResponse;
use crate::dto::orders::{OrderListQuery, PlaceOrderBody, UpdateOrderStatusBody};
use crate::error::ApiError;
use crate::AppState;

/// Places an order for a guest. Items are priced at placement: object
/// items by their own price, legacy name-only items from the fallback
/// menu. Orders always start PENDING.
pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderBody>,
) -> Result<Json<FoodOrder>, ApiError> {
    let order = NewFoodOrder::place(body.guest_id, body.items);
    let repository = OrderRepository::new(state.pool.clone());
    let placed = repository.place(&order).await?;
    Ok(Json(placed))
}

/// Orders newest first with guest and location context, optionally
/// filtered by status.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<OrderWithContext>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let repository = OrderRepository::new(state.pool.clone());
    let orders = repository.list(status).await?;
    Ok(Json(orders))
}

/// Advances an order through PENDING -> COMPLETED -> PAID.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrderStatusBody>,
) -> Result<Json<FoodOrder>, ApiError> {
    let repository = OrderRepository::new(state.pool.clone());
    let order = repository.update_status(id, body.status).await?;
    Ok(Json(order))
}

/// Deletes an order unconditionally.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repository = OrderRepository::new(state.pool.clone());
    repository.delete(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
