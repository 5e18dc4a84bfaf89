//! Guest Domain - Stay Lifecycle
//!
//! This crate models a guest's stay from check-in to check-out:
//!
//! - [`Guest`] is the stay record. It references exactly one accommodation
//!   unit and moves through a one-way state machine:
//!   CHECKED_IN -> CHECKED_OUT (terminal). Deletion is possible from either
//!   state and is handled by the storage layer.
//! - [`group`] holds the pure parts of group bookings: one shared group id
//!   tags every guest created by a batch, and each unit in the batch gets a
//!   per-item outcome instead of being silently swallowed.
//!
//! The transactional writes (create + occupy, update + release) live in
//! `infra_db`; this crate only decides what is legal.

pub mod error;
pub mod group;
pub mod guest;

pub use error::GuestError;
pub use group::{GroupCheckInPlan, GroupUnitOutcome, UnitResult};
pub use guest::{CheckInRequest, Guest, GuestPatch, GuestStatus, PaymentMode};
