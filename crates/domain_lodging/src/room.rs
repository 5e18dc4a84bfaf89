//! Private rooms

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::unit::UnitStatus;

/// A private room
///
/// Seeded at setup and never deleted in normal operation; only the status
/// changes as guests come and go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    /// Human-readable label, unique across the hostel (e.g. "Room 3")
    pub room_number: String,
    pub has_balcony: bool,
    /// Configured nightly price; billing applies it only when the
    /// accommodation-charge policy is enabled
    pub price: Decimal,
    pub status: UnitStatus,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// Room fields under staff control at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_number: String,
    pub has_balcony: bool,
    pub price: Decimal,
}
