//! Orders Domain - Food Order Ledger
//!
//! Food orders are append-only records tied to a guest. Each order carries
//! an opaque item payload that exists in two historical formats:
//!
//! - the current format, an array of `{name, price, qty}` objects
//! - a legacy format, an array of bare item-name strings with no price
//!
//! Stored order totals were observed to drift from their payloads, so
//! billing never trusts the stored scalar: the canonical total is always
//! re-derived from the payload ([`line_items::billable_total`]). Legacy
//! payloads price at zero on bills because the price cannot be recovered;
//! at placement time they resolve against a static fallback menu instead.

pub mod error;
pub mod line_items;
pub mod menu;
pub mod order;

pub use error::OrderError;
pub use line_items::{billable_total, placement_total, LineItem, OrderItem};
pub use menu::{fallback_price, MenuItem, MenuItemPatch, NewMenuItem};
pub use order::{FoodOrder, NewFoodOrder, OrderStatus};
