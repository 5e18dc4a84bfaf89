//! Guest handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use domain_billing::compute_bill;
use domain_guest::{Guest, GuestPatch, GuestStatus};
use domain_orders::line_items::to_payload;
use infra_db::{GuestRepository, GuestWithUnit};

use crate::dto::guests::{BillResponse, DeleteResponse, GuestListQuery, UpdateGuestBody};
use crate::error::ApiError;
use crate::AppState;

/// Lists guests, newest check-in first, optionally filtered by status.
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestListQuery>,
) -> Result<Json<Vec<GuestWithUnit>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<GuestStatus>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let repository = GuestRepository::new(state.pool.clone());
    let guests = repository.list(status).await?;
    Ok(Json(guests))
}

/// Patches a guest's editable details.
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateGuestBody>,
) -> Result<Json<Guest>, ApiError> {
    let patch: GuestPatch = body.into();
    let repository = GuestRepository::new(state.pool.clone());
    let guest = repository.update_details(id, &patch).await?;
    Ok(Json(guest))
}

/// Deletes a guest, their orders, and frees their unit if still occupied.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repository = GuestRepository::new(state.pool.clone());
    repository.delete(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// The guest's bill: final for closed stays, a live preview otherwise.
///
/// Food totals are re-derived from each order's payload; the stored order
/// totals are never used here.
pub async fn get_bill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BillResponse>, ApiError> {
    let repository = GuestRepository::new(state.pool.clone());
    let (guest, nightly_price, orders) = repository.bill_context(id).await?;

    let now = Utc::now();
    let payloads: Vec<String> = orders.iter().map(|o| to_payload(&o.items)).collect();
    let bill = compute_bill(
        guest.check_in_at,
        guest.check_out_at,
        nightly_price,
        &payloads,
        state.config.billing_policy(),
        now,
    );

    Ok(Json(BillResponse {
        guest_name: guest.name,
        check_in: guest.check_in_at,
        check_out: guest.check_out_at.unwrap_or(now),
        nights: bill.nights,
        price_per_night: bill.price_per_night,
        accommodation_total: bill.accommodation_total,
        food_total: bill.food_total,
        total_bill: bill.total_bill,
        orders,
    }))
}
