//! Billing Domain - Stay and Food Bill Calculation
//!
//! The calculator is pure: given a stay window, the unit's nightly price,
//! the guest's order payloads, and the billing policy, it produces the
//! nightly count and the payable totals. The same function backs the live
//! bill preview (checkout time defaulting to "now") and the final amount
//! persisted at checkout.
//!
//! Current business policy bills food only: the nightly price is configured
//! on every unit but [`BillingPolicy::include_accommodation`] defaults to
//! off, zeroing the accommodation line. Flip the policy to re-enable it;
//! the multiplication never left.

pub mod calculator;

pub use calculator::{compute_bill, BillSummary, BillingPolicy};
