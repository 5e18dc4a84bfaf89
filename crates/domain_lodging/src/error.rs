//! Lodging domain errors

use thiserror::Error;

/// Errors that can occur in the lodging domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LodgingError {
    /// Status string from storage does not name a known status
    #[error("Unknown unit status: {0}")]
    UnknownStatus(String),

    /// Bunk type string from storage does not name a known type
    #[error("Unknown bunk type: {0}")]
    UnknownBunkType(String),
}
