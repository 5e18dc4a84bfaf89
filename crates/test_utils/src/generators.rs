//! Property-Based Test Generators
//!
//! Proptest strategies for domain values.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_guest::PaymentMode;
use domain_orders::{LineItem, OrderItem};

/// A menu-plausible price: 0.00 to 500.00 in paise steps.
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..50_000).prop_map(|paise| Decimal::new(paise, 2))
}

/// A line-item quantity.
pub fn qty_strategy() -> impl Strategy<Value = i64> {
    0i64..20
}

/// A priced order item.
pub fn line_item_strategy() -> impl Strategy<Value = OrderItem> {
    ("[A-Za-z][A-Za-z ]{0,20}", price_strategy(), qty_strategy()).prop_map(
        |(name, price, qty)| {
            OrderItem::Line(LineItem { name, price, qty })
        },
    )
}

/// A legacy name-only order item.
pub fn legacy_item_strategy() -> impl Strategy<Value = OrderItem> {
    prop_oneof![
        Just(OrderItem::Name("Burger".to_string())),
        Just(OrderItem::Name("Tea".to_string())),
        Just(OrderItem::Name("Coke".to_string())),
        Just(OrderItem::Name("Unknown Dish".to_string())),
    ]
}

/// An order payload in either format (never mixed, like real payloads).
pub fn order_items_strategy() -> impl Strategy<Value = Vec<OrderItem>> {
    prop_oneof![
        proptest::collection::vec(line_item_strategy(), 1..6),
        proptest::collection::vec(legacy_item_strategy(), 1..6),
    ]
}

/// Any payment mode.
pub fn payment_mode_strategy() -> impl Strategy<Value = PaymentMode> {
    prop_oneof![
        Just(PaymentMode::Cash),
        Just(PaymentMode::Upi),
        Just(PaymentMode::Card),
    ]
}

/// A timestamp within 2025.
pub fn timestamp_2025_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365 * 24 * 60 * 60).prop_map(|offset| {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(offset)
    })
}

/// A (check_in, check_out) pair with check_out no earlier than check_in.
pub fn stay_window_strategy() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (timestamp_2025_strategy(), 0i64..(90 * 24 * 60)).prop_map(|(check_in, minutes)| {
        (check_in, check_in + chrono::Duration::minutes(minutes))
    })
}
