//! Guest aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use domain_lodging::UnitRef;

use crate::error::GuestError;

/// Stay status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuestStatus {
    CheckedIn,
    CheckedOut,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::CheckedIn => "CHECKED_IN",
            GuestStatus::CheckedOut => "CHECKED_OUT",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuestStatus {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKED_IN" => Ok(GuestStatus::CheckedIn),
            "CHECKED_OUT" => Ok(GuestStatus::CheckedOut),
            other => Err(GuestError::UnknownStatus(other.to_string())),
        }
    }
}

/// How the guest intends to settle the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    #[default]
    Cash,
    Upi,
    Card,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "CARD",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(PaymentMode::Cash),
            "UPI" => Ok(PaymentMode::Upi),
            "CARD" => Ok(PaymentMode::Card),
            other => Err(GuestError::UnknownPaymentMode(other.to_string())),
        }
    }
}

/// A guest's stay, from check-in until (and after) check-out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub payment_mode: PaymentMode,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub status: GuestStatus,
    /// The single unit this stay occupies
    pub unit: UnitRef,
    /// Shared id tagging guests created by one group booking
    pub group_id: Option<Uuid>,
    /// Final amount, persisted at checkout; zero while checked in
    pub total_bill: Decimal,
}

impl Guest {
    pub fn is_checked_in(&self) -> bool {
        self.status == GuestStatus::CheckedIn
    }

    /// Checks that checkout is legal from the current state.
    pub fn ensure_can_check_out(&self) -> Result<(), GuestError> {
        match self.status {
            GuestStatus::CheckedIn => Ok(()),
            GuestStatus::CheckedOut => Err(GuestError::AlreadyCheckedOut(self.id)),
        }
    }
}

/// Validated input for a single check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub payment_mode: PaymentMode,
    pub unit: UnitRef,
}

impl CheckInRequest {
    /// Builds a request from raw wire fields, enforcing the check-in
    /// preconditions: a non-empty name and exactly one unit reference.
    pub fn new(
        name: impl Into<String>,
        mobile: Option<String>,
        city: Option<String>,
        payment_mode: Option<PaymentMode>,
        room_id: Option<i64>,
        dorm_bed_id: Option<i64>,
    ) -> Result<Self, GuestError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GuestError::MissingName);
        }
        let unit = UnitRef::from_ids(room_id, dorm_bed_id).ok_or(GuestError::MissingUnit)?;
        Ok(Self {
            name,
            mobile: mobile.unwrap_or_default(),
            city: city.unwrap_or_default(),
            payment_mode: payment_mode.unwrap_or_default(),
            unit,
        })
    }
}

/// Staff-editable guest fields; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub payment_mode: Option<PaymentMode>,
}

impl GuestPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.city.is_none()
            && self.payment_mode.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_requires_a_name() {
        let result = CheckInRequest::new("  ", None, None, None, Some(1), None);
        assert!(matches!(result, Err(GuestError::MissingName)));
    }

    #[test]
    fn check_in_requires_a_unit() {
        let result = CheckInRequest::new("Asha", None, None, None, None, None);
        assert!(matches!(result, Err(GuestError::MissingUnit)));
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let request = CheckInRequest::new("Asha", None, None, None, None, Some(7)).unwrap();
        assert_eq!(request.mobile, "");
        assert_eq!(request.city, "");
        assert_eq!(request.payment_mode, PaymentMode::Cash);
        assert_eq!(request.unit, UnitRef::DormBed(7));
    }
}
