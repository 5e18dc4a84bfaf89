//! Operational maintenance

use sqlx::PgPool;

use domain_lodging::UnitStatus;

use crate::error::DatabaseError;

/// Counts of what a reset touched
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ResetReport {
    pub orders_deleted: u64,
    pub guests_deleted: u64,
    pub rooms_reset: u64,
    pub beds_reset: u64,
}

/// Repository for destructive operational tasks
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Wipes all guest and order data and returns every unit to AVAILABLE.
    /// One transaction; irreversible. Intended for resets between live
    /// deployments, not day-to-day use.
    pub async fn reset_guest_data(&self) -> Result<ResetReport, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let orders_deleted = sqlx::query("DELETE FROM food_orders")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let guests_deleted = sqlx::query("DELETE FROM guests")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let rooms_reset = sqlx::query("UPDATE rooms SET status = $1")
            .bind(UnitStatus::Available.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let beds_reset = sqlx::query("UPDATE dorm_beds SET status = $1")
            .bind(UnitStatus::Available.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        let report = ResetReport {
            orders_deleted,
            guests_deleted,
            rooms_reset,
            beds_reset,
        };
        tracing::warn!(?report, "guest and order data reset");
        Ok(report)
    }
}
