//! Guest DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_guest::{GuestPatch, PaymentMode};
use domain_orders::FoodOrder;

#[derive(Debug, Deserialize)]
pub struct UpdateGuestBody {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub payment_mode: Option<PaymentMode>,
}

impl From<UpdateGuestBody> for GuestPatch {
    fn from(body: UpdateGuestBody) -> Self {
        GuestPatch {
            name: body.name,
            mobile: body.mobile,
            city: body.city,
            payment_mode: body.payment_mode,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GuestListQuery {
    /// CHECKED_IN or CHECKED_OUT
    pub status: Option<String>,
}

/// The live or final bill for a stay
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub guest_name: String,
    pub check_in: DateTime<Utc>,
    /// The recorded checkout for closed stays, "now" for live previews
    pub check_out: DateTime<Utc>,
    pub nights: i64,
    pub price_per_night: Decimal,
    pub accommodation_total: Decimal,
    pub food_total: Decimal,
    pub total_bill: Decimal,
    pub orders: Vec<FoodOrder>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
