//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than bare equality checks.

use rust_decimal::Decimal;

use domain_billing::BillSummary;
use domain_guest::{Guest, GuestStatus};
use domain_lodging::UnitStatus;

/// Asserts a bill adds up and carries the expected totals.
pub fn assert_bill(bill: &BillSummary, nights: i64, food_total: Decimal, total: Decimal) {
    assert_eq!(bill.nights, nights, "night count mismatch: {:?}", bill);
    assert_eq!(bill.food_total, food_total, "food total mismatch: {:?}", bill);
    assert_eq!(bill.total_bill, total, "total mismatch: {:?}", bill);
    assert_eq!(
        bill.total_bill,
        bill.accommodation_total + bill.food_total,
        "bill does not add up: {:?}",
        bill
    );
}

/// Asserts a guest is checked in with no checkout state.
pub fn assert_checked_in(guest: &Guest) {
    assert_eq!(
        guest.status,
        GuestStatus::CheckedIn,
        "expected CHECKED_IN, got {:?}",
        guest.status
    );
    assert!(
        guest.check_out_at.is_none(),
        "checked-in guest has a checkout time: {:?}",
        guest.check_out_at
    );
}

/// Asserts a guest's stay is closed: checked out with a checkout time.
pub fn assert_checked_out(guest: &Guest) {
    assert_eq!(
        guest.status,
        GuestStatus::CheckedOut,
        "expected CHECKED_OUT, got {:?}",
        guest.status
    );
    assert!(
        guest.check_out_at.is_some(),
        "checked-out guest has no checkout time"
    );
}

/// Asserts a unit status, with a readable message.
pub fn assert_unit_status(actual: UnitStatus, expected: UnitStatus, context: &str) {
    assert_eq!(
        actual, expected,
        "unit status mismatch for {}: expected {}, got {}",
        context, expected, actual
    );
}
