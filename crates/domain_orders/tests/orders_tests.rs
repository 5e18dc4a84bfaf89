//! Tests for the order ledger

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use domain_orders::{
    billable_total, placement_total, LineItem, NewFoodOrder, OrderItem, OrderStatus,
};

fn line(name: &str, price: Decimal, qty: i64) -> OrderItem {
    OrderItem::Line(LineItem {
        name: name.to_string(),
        price,
        qty,
    })
}

#[test]
fn stored_and_recomputed_totals_agree_for_priced_items() {
    let items = vec![line("Tea", dec!(10), 2)];
    let order = NewFoodOrder::place(Uuid::new_v4(), items.clone());
    assert_eq!(order.total_amount, dec!(20));

    let payload = domain_orders::line_items::to_payload(&items);
    assert_eq!(billable_total(&payload), dec!(20));
}

#[test]
fn legacy_orders_charge_fallback_prices_at_placement() {
    let items = vec![
        OrderItem::Name("Burger".to_string()),
        OrderItem::Name("Coke".to_string()),
    ];
    let order = NewFoodOrder::place(Uuid::new_v4(), items);
    assert_eq!(order.total_amount, dec!(200));
}

#[test]
fn legacy_orders_bill_at_zero_no_matter_the_stored_total() {
    // Recomputation always wins over the stored scalar: the charged price
    // of a name-only payload cannot be recovered at bill time.
    let payload = r#"["Burger","Coke"]"#;
    assert_eq!(billable_total(payload), dec!(0));
}

#[test]
fn mixed_payload_bills_only_its_priced_items() {
    let payload = r#"[{"name":"Tea","price":10,"qty":2},"Burger"]"#;
    assert_eq!(billable_total(payload), dec!(20));
}

#[test]
fn zero_quantity_lines_contribute_nothing() {
    let items = vec![line("Tea", dec!(10), 0), line("Coffee", dec!(50), 1)];
    assert_eq!(placement_total(&items), dec!(50));
}

#[test]
fn status_workflow_is_forward_only() {
    assert!(OrderStatus::Pending
        .ensure_can_transition_to(OrderStatus::Completed)
        .is_ok());
    assert!(OrderStatus::Pending
        .ensure_can_transition_to(OrderStatus::Paid)
        .is_ok());

    let err = OrderStatus::Paid
        .ensure_can_transition_to(OrderStatus::Pending)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid order status transition: PAID -> PENDING"
    );
}

#[test]
fn payload_round_trips_through_canonical_form() {
    let items = vec![line("Veg Thali", dec!(150), 1), OrderItem::Name("Chai".to_string())];
    let payload = domain_orders::line_items::to_payload(&items);
    assert_eq!(domain_orders::line_items::parse_items(&payload), items);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_line() -> impl Strategy<Value = OrderItem> {
        ("[A-Za-z ]{1,16}", 0i64..10_000, 0i64..50).prop_map(|(name, paise, qty)| {
            line(&name, Decimal::new(paise, 2), qty)
        })
    }

    proptest! {
        #[test]
        fn priced_payloads_recompute_to_their_placement_total(
            items in proptest::collection::vec(arb_line(), 1..8)
        ) {
            let total = placement_total(&items);
            let payload = domain_orders::line_items::to_payload(&items);
            prop_assert_eq!(billable_total(&payload), total);
        }

        #[test]
        fn billable_total_never_panics_on_arbitrary_input(payload in ".*") {
            let _ = billable_total(&payload);
        }
    }
}
