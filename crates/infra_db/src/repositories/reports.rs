//! Reporting queries
//!
//! Daily operational numbers and the bounded checkout-history export. Day
//! boundaries come from the caller as precomputed UTC windows so the
//! hostel's timezone is decided in one place (configuration).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::temporal::DayWindow;
use domain_guest::GuestStatus;

use crate::error::DatabaseError;

/// One row of checkout history
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CheckoutRecord {
    pub name: String,
    pub mobile: String,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub total_bill: Decimal,
    pub room_number: Option<String>,
    pub floor_number: Option<i32>,
    pub bed_number: Option<i32>,
}

/// The daily operations summary
#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub today_orders_count: i64,
    pub today_check_ins_count: i64,
    pub active_guests_count: i64,
    /// Sum of today's stored order totals. This is an operational number,
    /// not a bill: it deliberately uses the placement-time totals.
    pub today_revenue: Decimal,
    pub recent_checkouts: Vec<CheckoutRecord>,
}

const CHECKOUT_QUERY: &str =
    "SELECT g.name, g.mobile, g.check_in_at, g.check_out_at, g.total_bill,
            r.room_number, b.floor_number, b.bed_number
     FROM guests g
     LEFT JOIN rooms r ON r.id = g.room_id
     LEFT JOIN dorm_beds b ON b.id = g.dorm_bed_id
     WHERE g.status = $1";

/// Repository for reports
#[derive(Debug, Clone)]
pub struct ReportsRepository {
    pool: PgPool,
}

impl ReportsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Today's orders, check-ins, occupancy, revenue, and the latest ten
    /// checkouts.
    pub async fn daily_summary(&self, today: DayWindow) -> Result<DailySummary, DatabaseError> {
        let (today_orders_count, today_revenue): (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(total_amount), 0)
             FROM food_orders
             WHERE created_at >= $1 AND created_at <= $2",
        )
        .bind(today.start)
        .bind(today.end)
        .fetch_one(&self.pool)
        .await?;

        let today_check_ins_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM guests WHERE check_in_at >= $1 AND check_in_at <= $2",
        )
        .bind(today.start)
        .bind(today.end)
        .fetch_one(&self.pool)
        .await?;

        let active_guests_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE status = $1")
                .bind(GuestStatus::CheckedIn.as_str())
                .fetch_one(&self.pool)
                .await?;

        let query = format!("{CHECKOUT_QUERY} ORDER BY g.check_out_at DESC LIMIT 10");
        let recent_checkouts = sqlx::query_as::<_, CheckoutRecord>(&query)
            .bind(GuestStatus::CheckedOut.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(DailySummary {
            today_orders_count,
            today_check_ins_count,
            active_guests_count,
            today_revenue,
            recent_checkouts,
        })
    }

    /// Checkout history within the given (already validated) day window,
    /// newest first.
    pub async fn export_checkouts(
        &self,
        window: DayWindow,
    ) -> Result<Vec<CheckoutRecord>, DatabaseError> {
        let query = format!(
            "{CHECKOUT_QUERY} AND g.check_out_at >= $2 AND g.check_out_at <= $3
             ORDER BY g.check_out_at DESC"
        );
        let records = sqlx::query_as::<_, CheckoutRecord>(&query)
            .bind(GuestStatus::CheckedOut.as_str())
            .bind(window.start)
            .bind(window.end)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}
