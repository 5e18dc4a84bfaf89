//! Lodging Domain - Accommodation Inventory
//!
//! This crate models the hostel's bookable units: private rooms and dorm
//! beds. A unit is either AVAILABLE or OCCUPIED; the lifecycle operations in
//! the guest domain flip that status as guests check in and out.
//!
//! No transition validation happens at this layer. Callers that need
//! occupy-only-if-available semantics (check-in) enforce them through the
//! storage layer's conditional claim.

pub mod dorm_bed;
pub mod error;
pub mod layout;
pub mod room;
pub mod unit;

pub use dorm_bed::{BunkType, DormBed, NewDormBed};
pub use error::LodgingError;
pub use layout::{standard_dorm_beds, standard_rooms};
pub use room::{NewRoom, Room};
pub use unit::{UnitRef, UnitStatus};
