//! Guest domain errors

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in the guest lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuestError {
    /// Check-in submitted without a guest name
    #[error("Guest name is required")]
    MissingName,

    /// Check-in submitted with neither a room nor a dorm bed
    #[error("A room or dorm bed reference is required")]
    MissingUnit,

    /// Group booking submitted with no units selected
    #[error("No rooms or beds selected")]
    EmptyGroup,

    /// Checkout attempted on a guest that already checked out
    #[error("Guest {0} is already checked out")]
    AlreadyCheckedOut(Uuid),

    /// Status string from storage does not name a known status
    #[error("Unknown guest status: {0}")]
    UnknownStatus(String),

    /// Payment mode string from storage does not name a known mode
    #[error("Unknown payment mode: {0}")]
    UnknownPaymentMode(String),
}
