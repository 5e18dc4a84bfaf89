//! Orders domain errors

use thiserror::Error;

use crate::order::OrderStatus;

/// Errors that can occur in the order ledger
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Status move violates the forward-only workflow
    #[error("Invalid order status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Status string from storage does not name a known status
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}
