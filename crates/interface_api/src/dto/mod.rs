//! Request and response data transfer objects

pub mod dashboard;
pub mod guests;
pub mod lifecycle;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod staff;
