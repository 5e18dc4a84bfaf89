//! Staff Domain - Accounts and Roles
//!
//! Staff accounts exist only for login and authorization. Authorization is
//! role-based: ADMIN unlocks staff management and destructive operations,
//! STAFF covers day-to-day front-desk work.
//!
//! Passwords are stored and compared in clear text. This reproduces the
//! source system's login behavior and is a known, documented deficiency,
//! not an invitation: see DESIGN.md before deploying this anywhere real.

pub mod error;
pub mod staff;

pub use error::StaffError;
pub use staff::{NewStaff, Staff, StaffRole};
