//! The bill calculator

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::temporal::nights_between;
use domain_orders::billable_total;

/// Billing policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPolicy {
    /// Charge nights x nightly price on top of food. Off by default:
    /// the hostel currently bills food only.
    pub include_accommodation: bool,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            include_accommodation: false,
        }
    }
}

impl BillingPolicy {
    pub fn food_only() -> Self {
        Self::default()
    }

    pub fn with_accommodation() -> Self {
        Self {
            include_accommodation: true,
        }
    }
}

/// The derived bill for one stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    pub nights: i64,
    /// The rate actually applied: the unit's price under the accommodation
    /// policy, zero under food-only
    pub price_per_night: Decimal,
    pub accommodation_total: Decimal,
    pub food_total: Decimal,
    pub total_bill: Decimal,
}

/// Computes the bill for a stay.
///
/// `check_out` is the recorded checkout instant for finalized stays and
/// `None` for a live preview, in which case `now` bounds the window.
/// Food totals follow the ledger's recomputation policy: every payload is
/// re-derived, stored order totals are ignored, and legacy name-only
/// payloads contribute zero.
pub fn compute_bill<P: AsRef<str>>(
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
    nightly_price: Decimal,
    order_payloads: &[P],
    policy: BillingPolicy,
    now: DateTime<Utc>,
) -> BillSummary {
    let until = check_out.unwrap_or(now);
    let nights = nights_between(check_in, until);

    let price_per_night = if policy.include_accommodation {
        nightly_price
    } else {
        Decimal::ZERO
    };
    let accommodation_total = price_per_night * Decimal::from(nights);

    let food_total: Decimal = order_payloads
        .iter()
        .map(|payload| billable_total(payload.as_ref()))
        .sum();

    BillSummary {
        nights,
        price_per_night,
        accommodation_total,
        food_total,
        total_bill: accommodation_total + food_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, h, 0, 0).unwrap()
    }

    #[test]
    fn food_only_is_the_default() {
        let bill = compute_bill(
            at(10),
            Some(at(10) + Duration::days(3)),
            dec!(2000),
            &[r#"[{"name":"Tea","price":10,"qty":2}]"#],
            BillingPolicy::default(),
            at(10),
        );
        assert_eq!(bill.nights, 3);
        assert_eq!(bill.price_per_night, dec!(0));
        assert_eq!(bill.accommodation_total, dec!(0));
        assert_eq!(bill.total_bill, dec!(20));
    }

    #[test]
    fn accommodation_policy_restores_the_multiplication() {
        let bill = compute_bill(
            at(10),
            Some(at(10) + Duration::days(3)),
            dec!(2000),
            &[] as &[&str],
            BillingPolicy::with_accommodation(),
            at(10),
        );
        assert_eq!(bill.accommodation_total, dec!(6000));
        assert_eq!(bill.total_bill, dec!(6000));
    }

    #[test]
    fn preview_uses_now_when_not_checked_out() {
        let bill = compute_bill(
            at(10),
            None,
            dec!(500),
            &[] as &[&str],
            BillingPolicy::default(),
            at(10) + Duration::hours(25),
        );
        assert_eq!(bill.nights, 2);
    }
}
