//! Check-in / check-out DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_guest::{PaymentMode, UnitResult};

#[derive(Debug, Deserialize, Validate)]
pub struct CheckInBody {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub payment_mode: Option<PaymentMode>,
    pub room_id: Option<i64>,
    pub dorm_bed_id: Option<i64>,
}

/// Check out a guest directly, or whoever occupies the given unit
#[derive(Debug, Deserialize)]
pub struct CheckOutBody {
    pub guest_id: Option<Uuid>,
    pub room_id: Option<i64>,
    pub dorm_bed_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GroupGuestDetails {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub payment_mode: Option<PaymentMode>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GroupBookingBody {
    #[validate(nested)]
    pub guest_details: GroupGuestDetails,
    #[serde(default)]
    pub room_ids: Vec<i64>,
    #[serde(default)]
    pub dorm_bed_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct GroupBookingResponse {
    pub success: bool,
    /// Guests actually created; failed units appear in `results`
    pub count: usize,
    pub group_id: Uuid,
    pub results: Vec<UnitResult>,
}

#[derive(Debug, Deserialize)]
pub struct GroupCheckOutBody {
    #[serde(default)]
    pub guest_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct GroupCheckOutResponse {
    pub success: bool,
    pub checked_out_count: usize,
    pub results: Vec<UnitResult>,
}
