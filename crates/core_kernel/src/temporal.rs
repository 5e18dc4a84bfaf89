//! Temporal arithmetic for stays and reporting
//!
//! This module provides the time handling shared by the billing and
//! reporting code:
//! - Night counting: a stay is billed per started 24-hour period, never
//!   fewer than one night
//! - Day windows: "today" and date-range queries are anchored to midnight
//!   in the hostel's timezone, not the server's

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Maximum span, in days, accepted by the checkout-history export.
pub const MAX_EXPORT_DAYS: i64 = 32;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Date range spans {days} days, exceeding the one-month export limit")]
    RangeTooLarge { days: i64 },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Number of billable nights between check-in and check-out.
///
/// Counts started 24-hour periods, rounding up, with a minimum of one night:
/// a same-instant checkout is still one night, and 25 hours is two.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let elapsed_ms = (check_out - check_in).num_milliseconds().abs();
    let nights = (elapsed_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    nights.max(1)
}

/// Timezone the hostel operates in
///
/// Wraps `chrono_tz::Tz` with serde support so it can live in configuration.
/// Daily report windows are computed against this zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA zone name such as "Asia/Kolkata".
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(name.to_string()))
    }

    /// Start of day (00:00:00) for the given local date, as UTC.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(0, 0, 0)
            .unwrap()
            .and_local_timezone(self.0)
            .earliest()
            .unwrap_or_else(|| {
                // DST gap: fall forward to the first valid instant
                (date.and_hms_opt(1, 0, 0).unwrap())
                    .and_local_timezone(self.0)
                    .earliest()
                    .expect("no valid instant on date")
            })
            .with_timezone(&Utc)
    }

    /// End of day (23:59:59.999) for the given local date, as UTC.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.start_of_day(date.succ_opt().expect("date overflow")) - Duration::milliseconds(1)
    }

    /// The current local date in this zone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kolkata)
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A UTC half-open-in-spirit window covering whole local days
///
/// Used for "today's" dashboard numbers and the bounded checkout export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// The window covering the current local day.
    pub fn today(tz: Timezone, now: DateTime<Utc>) -> Self {
        let date = tz.today(now);
        Self {
            start: tz.start_of_day(date),
            end: tz.end_of_day(date),
        }
    }

    /// A window from `from` through `to` inclusive, expanded to full days.
    ///
    /// Rejects inverted ranges and ranges spanning more than
    /// [`MAX_EXPORT_DAYS`] days.
    pub fn export_range(tz: Timezone, from: NaiveDate, to: NaiveDate) -> Result<Self, TemporalError> {
        if from > to {
            return Err(TemporalError::InvalidPeriod {
                start: from.to_string(),
                end: to.to_string(),
            });
        }
        let days = (to - from).num_days() + 1;
        if days > MAX_EXPORT_DAYS {
            return Err(TemporalError::RangeTooLarge { days });
        }
        Ok(Self {
            start: tz.start_of_day(from),
            end: tz.end_of_day(to),
        })
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn zero_duration_is_one_night() {
        let t = utc(2025, 3, 10, 14, 0);
        assert_eq!(nights_between(t, t), 1);
    }

    #[test]
    fn twenty_five_hours_is_two_nights() {
        let t = utc(2025, 3, 10, 14, 0);
        assert_eq!(nights_between(t, t + Duration::hours(25)), 2);
    }

    #[test]
    fn exactly_one_day_is_one_night() {
        let t = utc(2025, 3, 10, 14, 0);
        assert_eq!(nights_between(t, t + Duration::hours(24)), 1);
    }

    #[test]
    fn export_range_rejects_over_limit() {
        let tz = Timezone::default();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(); // 33 days inclusive
        assert!(matches!(
            DayWindow::export_range(tz, from, to),
            Err(TemporalError::RangeTooLarge { days: 33 })
        ));
    }

    #[test]
    fn export_range_accepts_full_month() {
        let tz = Timezone::default();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let window = DayWindow::export_range(tz, from, to).unwrap();
        assert!(window.start < window.end);
    }

    #[test]
    fn today_window_contains_now() {
        let tz = Timezone::default();
        let now = utc(2025, 6, 15, 9, 30);
        let window = DayWindow::today(tz, now);
        assert!(window.contains(now));
    }
}
