//! Request handlers

pub mod admin;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod lifecycle;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod session;
pub mod staff;
