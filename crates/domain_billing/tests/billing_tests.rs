//! Tests for the billing calculator

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use domain_billing::{compute_bill, BillSummary, BillingPolicy};

fn check_in() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

const NO_ORDERS: &[&str] = &[];

#[test]
fn immediate_checkout_bills_one_night() {
    let t = check_in();
    let bill = compute_bill(t, Some(t), dec!(2000), NO_ORDERS, BillingPolicy::default(), t);
    assert_eq!(bill.nights, 1);
}

#[test]
fn twenty_five_hours_bills_two_nights() {
    let t = check_in();
    let bill = compute_bill(
        t,
        Some(t + Duration::hours(25)),
        dec!(2000),
        NO_ORDERS,
        BillingPolicy::default(),
        t,
    );
    assert_eq!(bill.nights, 2);
}

#[test]
fn well_formed_orders_recompute_to_their_stored_totals() {
    let t = check_in();
    let bill = compute_bill(
        t,
        Some(t + Duration::days(1)),
        dec!(500),
        &[r#"[{"name":"Tea","price":10,"qty":2}]"#],
        BillingPolicy::default(),
        t,
    );
    assert_eq!(bill.food_total, dec!(20));
    assert_eq!(bill.total_bill, dec!(20));
}

#[test]
fn legacy_orders_contribute_zero_even_with_a_stored_total() {
    // The stored scalar on a legacy order is irrelevant; the payload rules.
    let t = check_in();
    let bill = compute_bill(
        t,
        Some(t + Duration::days(1)),
        dec!(500),
        &[r#"["Burger","Coke"]"#],
        BillingPolicy::default(),
        t,
    );
    assert_eq!(bill.food_total, dec!(0));
}

#[test]
fn payloads_sum_across_orders() {
    let t = check_in();
    let bill = compute_bill(
        t,
        None,
        dec!(500),
        &[
            r#"[{"name":"Tea","price":10,"qty":2}]"#,
            r#"[{"name":"Veg Thali","price":150,"qty":2}]"#,
            r#"["Maggi"]"#,
        ],
        BillingPolicy::default(),
        t + Duration::hours(2),
    );
    assert_eq!(bill.food_total, dec!(320));
}

#[test]
fn two_day_stay_with_tea_totals_twenty_food_only() {
    // The reference scenario: Rahul Sharma, Room 1 at 2000/night, one order
    // of Tea x2 at 10, checked out two days later. Food-only policy bills
    // exactly the tea.
    let t = check_in();
    let bill = compute_bill(
        t,
        Some(t + Duration::days(2)),
        dec!(2000),
        &[r#"[{"name":"Tea","price":10,"qty":2}]"#],
        BillingPolicy::default(),
        t,
    );
    assert_eq!(
        bill,
        BillSummary {
            nights: 2,
            price_per_night: dec!(0),
            accommodation_total: dec!(0),
            food_total: dec!(20),
            total_bill: dec!(20),
        }
    );
}

#[test]
fn accommodation_toggle_charges_nights_times_price() {
    let t = check_in();
    let bill = compute_bill(
        t,
        Some(t + Duration::days(2)),
        dec!(2500),
        &[r#"[{"name":"Tea","price":10,"qty":2}]"#],
        BillingPolicy::with_accommodation(),
        t,
    );
    assert_eq!(bill.price_per_night, dec!(2500));
    assert_eq!(bill.accommodation_total, dec!(5000));
    assert_eq!(bill.total_bill, dec!(5020));
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn total_is_accommodation_plus_food(
            hours in 0i64..2000,
            price in 0i64..10_000,
            include in proptest::bool::ANY,
        ) {
            let t = check_in();
            let policy = BillingPolicy { include_accommodation: include };
            let bill = compute_bill(
                t,
                Some(t + Duration::hours(hours)),
                Decimal::from(price),
                &[r#"[{"name":"Tea","price":10,"qty":2}]"#],
                policy,
                t,
            );
            prop_assert_eq!(bill.total_bill, bill.accommodation_total + bill.food_total);
            prop_assert!(bill.nights >= 1);
            if !include {
                prop_assert_eq!(bill.accommodation_total, Decimal::ZERO);
            }
        }
    }
}
