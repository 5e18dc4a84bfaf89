//! Order item payloads and total derivation
//!
//! Payloads are stored as opaque JSON text. Two formats exist in the wild;
//! both must parse, and unparsable payloads must price at zero rather than
//! fail a bill.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::menu::fallback_price;

/// A priced line item: the current payload format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
    pub qty: i64,
}

impl LineItem {
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// One element of an order payload, either format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderItem {
    /// Current format: `{"name": "Tea", "price": 10, "qty": 2}`
    Line(LineItem),
    /// Legacy format: a bare item name with no price information
    Name(String),
}

/// Parses a stored payload, accepting both formats.
///
/// Returns an empty list for anything that is not a JSON array; a bill must
/// never fail because one order carries a corrupt payload.
pub fn parse_items(payload: &str) -> Vec<OrderItem> {
    serde_json::from_str(payload).unwrap_or_default()
}

/// Serializes items into the canonical stored form.
pub fn to_payload(items: &[OrderItem]) -> String {
    serde_json::to_string(items).expect("order items serialize")
}

/// Total charged when the order is placed.
///
/// Priced items contribute price x qty. Legacy name-only items resolve
/// against the static fallback menu and contribute zero when unknown.
pub fn placement_total(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| match item {
            OrderItem::Line(line) => line.total(),
            OrderItem::Name(name) => fallback_price(name).unwrap_or_default(),
        })
        .sum()
}

/// Total an order contributes to a bill, re-derived from its payload.
///
/// Mirrors the recomputation policy: a payload whose leading element is a
/// priced item sums price x qty over its priced items; a legacy payload
/// (bare strings) contributes zero because the charged price cannot be
/// recovered, regardless of what the stored total claims.
pub fn billable_total(payload: &str) -> Decimal {
    let items = parse_items(payload);
    match items.first() {
        Some(OrderItem::Line(_)) => items
            .iter()
            .filter_map(|item| match item {
                OrderItem::Line(line) => Some(line.total()),
                OrderItem::Name(_) => None,
            })
            .sum(),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn both_formats_parse() {
        let current = parse_items(r#"[{"name":"Tea","price":10,"qty":2}]"#);
        assert_eq!(
            current,
            vec![OrderItem::Line(LineItem {
                name: "Tea".to_string(),
                price: dec!(10),
                qty: 2
            })]
        );

        let legacy = parse_items(r#"["Burger","Coke"]"#);
        assert_eq!(
            legacy,
            vec![
                OrderItem::Name("Burger".to_string()),
                OrderItem::Name("Coke".to_string())
            ]
        );
    }

    #[test]
    fn corrupt_payloads_parse_to_nothing() {
        assert!(parse_items("not json").is_empty());
        assert!(parse_items(r#"{"name":"Tea"}"#).is_empty());
    }

    #[test]
    fn billable_total_sums_priced_payloads() {
        assert_eq!(
            billable_total(r#"[{"name":"Tea","price":10,"qty":2},{"name":"Coffee","price":50,"qty":1}]"#),
            dec!(70)
        );
    }

    #[test]
    fn billable_total_prices_legacy_payloads_at_zero() {
        assert_eq!(billable_total(r#"["Burger","Coke"]"#), dec!(0));
        assert_eq!(billable_total("[]"), dec!(0));
        assert_eq!(billable_total("garbage"), dec!(0));
    }

    #[test]
    fn placement_total_resolves_legacy_names() {
        let items = vec![
            OrderItem::Name("Burger".to_string()),
            OrderItem::Name("Coke".to_string()),
        ];
        assert_eq!(placement_total(&items), dec!(200));
    }

    #[test]
    fn placement_total_prices_unknown_names_at_zero() {
        let items = vec![OrderItem::Name("Thali Deluxe".to_string())];
        assert_eq!(placement_total(&items), dec!(0));
    }
}
