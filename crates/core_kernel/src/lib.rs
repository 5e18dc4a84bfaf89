//! Core Kernel - Foundational types and utilities for the hostel system
//!
//! This crate provides the temporal building blocks used across the domain
//! modules: night counting for stays, and day windows for daily reports and
//! the bounded checkout export. Each domain carries its own error type; the
//! kernel only owns the errors of its own arithmetic.

pub mod temporal;

pub use temporal::{nights_between, DayWindow, TemporalError, Timezone, MAX_EXPORT_DAYS};
