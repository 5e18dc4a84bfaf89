//! Check-in / check-out handlers, single and group

use axum::{extract::State, Json};
use validator::Validate;

use domain_guest::{group, CheckInRequest, GroupCheckInPlan, Guest};
use domain_lodging::UnitRef;
use infra_db::{CheckoutOutcome, CheckoutTarget, GuestRepository};

use crate::dto::lifecycle::{
    CheckInBody, CheckOutBody, GroupBookingBody, GroupBookingResponse, GroupCheckOutBody,
    GroupCheckOutResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// Checks a guest in to a room or dorm bed.
pub async fn check_in(
    State(state): State<AppState>,
    Json(body): Json<CheckInBody>,
) -> Result<Json<Guest>, ApiError> {
    body.validate()?;
    let request = CheckInRequest::new(
        body.name,
        body.mobile,
        body.city,
        body.payment_mode,
        body.room_id,
        body.dorm_bed_id,
    )?;

    let repository = GuestRepository::new(state.pool.clone());
    let guest = repository.check_in(&request, None).await?;
    Ok(Json(guest))
}

/// Checks a guest out and finalizes the bill.
pub async fn check_out(
    State(state): State<AppState>,
    Json(body): Json<CheckOutBody>,
) -> Result<Json<CheckoutOutcome>, ApiError> {
    let target = match (body.guest_id, UnitRef::from_ids(body.room_id, body.dorm_bed_id)) {
        (Some(guest_id), _) => CheckoutTarget::Guest(guest_id),
        (None, Some(unit)) => CheckoutTarget::Unit(unit),
        (None, None) => {
            return Err(ApiError::BadRequest(
                "A guest id, room id, or dorm bed id is required".to_string(),
            ))
        }
    };

    let repository = GuestRepository::new(state.pool.clone());
    let outcome = repository
        .check_out(target, state.config.billing_policy())
        .await?;
    Ok(Json(outcome))
}

/// Books a batch of units for one lead guest under a shared group id.
pub async fn group_booking(
    State(state): State<AppState>,
    Json(body): Json<GroupBookingBody>,
) -> Result<Json<GroupBookingResponse>, ApiError> {
    body.validate()?;
    let details = body.guest_details;
    let plan = GroupCheckInPlan::new(
        details.name,
        details.mobile,
        details.city,
        details.payment_mode,
        &body.room_ids,
        &body.dorm_bed_ids,
    )?;

    let repository = GuestRepository::new(state.pool.clone());
    let results = repository.group_check_in(&plan).await?;

    Ok(Json(GroupBookingResponse {
        success: true,
        count: group::succeeded_count(&results),
        group_id: plan.group_id,
        results,
    }))
}

/// Checks out every listed guest; missing or already-checked-out guests
/// are reported per item, not failed.
pub async fn group_check_out(
    State(state): State<AppState>,
    Json(body): Json<GroupCheckOutBody>,
) -> Result<Json<GroupCheckOutResponse>, ApiError> {
    if body.guest_ids.is_empty() {
        return Err(ApiError::BadRequest(
            "No guests selected for checkout".to_string(),
        ));
    }

    let repository = GuestRepository::new(state.pool.clone());
    let results = repository
        .group_check_out(&body.guest_ids, state.config.billing_policy())
        .await?;

    Ok(Json(GroupCheckOutResponse {
        success: true,
        checked_out_count: group::succeeded_count(&results),
        results,
    }))
}
