//! Staff domain errors

use thiserror::Error;

/// Errors that can occur around staff accounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StaffError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,

    /// Role string from storage does not name a known role
    #[error("Unknown staff role: {0}")]
    UnknownRole(String),
}
