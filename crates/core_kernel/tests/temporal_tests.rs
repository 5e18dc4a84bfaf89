//! Tests for temporal arithmetic

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::temporal::{nights_between, DayWindow, TemporalError, Timezone, MAX_EXPORT_DAYS};

fn instant(h: u32, m: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, h, m, 0).unwrap()
}

#[test]
fn one_minute_stay_bills_one_night() {
    let check_in = instant(12, 0);
    assert_eq!(nights_between(check_in, check_in + Duration::minutes(1)), 1);
}

#[test]
fn just_over_one_day_bills_two_nights() {
    let check_in = instant(12, 0);
    assert_eq!(
        nights_between(check_in, check_in + Duration::hours(24) + Duration::minutes(1)),
        2
    );
}

#[test]
fn two_full_days_bill_two_nights() {
    let check_in = instant(12, 0);
    assert_eq!(nights_between(check_in, check_in + Duration::days(2)), 2);
}

#[test]
fn reversed_arguments_still_count_forward() {
    // The original system used an absolute difference; clock skew between
    // writes must not produce a negative night count.
    let check_in = instant(12, 0);
    let earlier = check_in - Duration::hours(30);
    assert_eq!(nights_between(check_in, earlier), 2);
}

#[test]
fn export_range_boundary_is_inclusive() {
    let tz = Timezone::default();
    let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let to = from + Duration::days(MAX_EXPORT_DAYS - 1);
    assert!(DayWindow::export_range(tz, from, to).is_ok());

    let too_far = from + Duration::days(MAX_EXPORT_DAYS);
    assert!(matches!(
        DayWindow::export_range(tz, from, too_far),
        Err(TemporalError::RangeTooLarge { .. })
    ));
}

#[test]
fn export_range_rejects_inverted_dates() {
    let tz = Timezone::default();
    let from = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    assert!(matches!(
        DayWindow::export_range(tz, from, to),
        Err(TemporalError::InvalidPeriod { .. })
    ));
}

#[test]
fn single_day_export_covers_the_whole_local_day() {
    let tz = Timezone::parse("Asia/Kolkata").unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
    let window = DayWindow::export_range(tz, day, day).unwrap();

    // Kolkata is UTC+5:30, so local midnight is 18:30 UTC the previous day.
    assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 5, 9, 18, 30, 0).unwrap());
    assert!(window.contains(Utc.with_ymd_and_hms(2025, 5, 10, 18, 0, 0).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2025, 5, 10, 18, 31, 0).unwrap()));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nights_is_always_at_least_one(offset_minutes in 0i64..(60 * 24 * 400)) {
            let check_in = instant(0, 0);
            let check_out = check_in + Duration::minutes(offset_minutes);
            prop_assert!(nights_between(check_in, check_out) >= 1);
        }

        #[test]
        fn nights_is_monotone_in_duration(a in 0i64..500_000, b in 0i64..500_000) {
            let check_in = instant(0, 0);
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            let short_nights = nights_between(check_in, check_in + Duration::minutes(short));
            let long_nights = nights_between(check_in, check_in + Duration::minutes(long));
            prop_assert!(short_nights <= long_nights);
        }
    }
}
