//! Food order repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use domain_orders::line_items::{parse_items, to_payload};
use domain_orders::{FoodOrder, NewFoodOrder, OrderStatus};

use crate::error::DatabaseError;

pub(crate) const ORDER_COLUMNS: &str =
    "id, guest_id, items, total_amount, status, created_at";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderRow {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub items: String,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for FoodOrder {
    type Error = DatabaseError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Ok(FoodOrder {
            id: row.id,
            guest_id: row.guest_id,
            items: parse_items(&row.items),
            total_amount: row.total_amount,
            status,
            created_at: row.created_at,
        })
    }
}

/// An order with its guest's name and location, for the kitchen view
#[derive(Debug, Serialize)]
pub struct OrderWithContext {
    #[serde(flatten)]
    pub order: FoodOrder,
    pub guest_name: String,
    /// "Room 2" or "F3-B11"; absent if the guest record is gone
    pub location: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct OrderContextRow {
    id: Uuid,
    guest_id: Uuid,
    items: String,
    total_amount: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    guest_name: String,
    room_number: Option<String>,
    floor_number: Option<i32>,
    bed_number: Option<i32>,
}

impl TryFrom<OrderContextRow> for OrderWithContext {
    type Error = DatabaseError;

    fn try_from(row: OrderContextRow) -> Result<Self, Self::Error> {
        let location = match (&row.room_number, row.floor_number, row.bed_number) {
            (Some(number), _, _) => Some(number.clone()),
            (None, Some(floor), Some(bed)) => Some(format!("F{}-B{}", floor, bed)),
            _ => None,
        };
        let guest_name = row.guest_name.clone();
        let order = FoodOrder::try_from(OrderRow {
            id: row.id,
            guest_id: row.guest_id,
            items: row.items,
            total_amount: row.total_amount,
            status: row.status,
            created_at: row.created_at,
        })?;
        Ok(OrderWithContext {
            order,
            guest_name,
            location,
        })
    }
}

/// Repository for the food order ledger
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a priced order. Always lands PENDING.
    ///
    /// # Errors
    ///
    /// `NotFound` when the guest does not exist.
    pub async fn place(&self, order: &NewFoodOrder) -> Result<FoodOrder, DatabaseError> {
        let guest_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM guests WHERE id = $1")
            .bind(order.guest_id)
            .fetch_optional(&self.pool)
            .await?;
        if guest_exists.is_none() {
            return Err(DatabaseError::not_found("Guest", order.guest_id));
        }

        let query = format!(
            "INSERT INTO food_orders (id, guest_id, items, total_amount, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ORDER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(Uuid::new_v4())
            .bind(order.guest_id)
            .bind(to_payload(&order.items))
            .bind(order.total_amount)
            .bind(OrderStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await?;

        let placed: FoodOrder = row.try_into()?;
        tracing::info!(
            order_id = %placed.id,
            guest_id = %placed.guest_id,
            total = %placed.total_amount,
            "order placed"
        );
        Ok(placed)
    }

    pub async fn find(&self, id: Uuid) -> Result<FoodOrder, DatabaseError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM food_orders WHERE id = $1");
        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Order", id))?;
        row.try_into()
    }

    /// Orders newest first, optionally filtered by status, each with the
    /// ordering guest's name and location.
    pub async fn list(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderWithContext>, DatabaseError> {
        let mut query = String::from(
            "SELECT o.id, o.guest_id, o.items, o.total_amount, o.status, o.created_at,
                    g.name AS guest_name, r.room_number, b.floor_number, b.bed_number
             FROM food_orders o
             JOIN guests g ON g.id = o.guest_id
             LEFT JOIN rooms r ON r.id = g.room_id
             LEFT JOIN dorm_beds b ON b.id = g.dorm_bed_id",
        );
        if status.is_some() {
            query.push_str(" WHERE o.status = $1");
        }
        query.push_str(" ORDER BY o.created_at DESC");

        let mut q = sqlx::query_as::<_, OrderContextRow>(&query);
        if let Some(status) = status {
            q = q.bind(status.as_str());
        }
        let rows = q.fetch_all(&self.pool).await?;
        rows.into_iter().map(OrderWithContext::try_from).collect()
    }

    /// Advances an order's status. Moves must be strictly forward in
    /// PENDING -> COMPLETED -> PAID; anything else is a constraint error.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: OrderStatus,
    ) -> Result<FoodOrder, DatabaseError> {
        let current = self.find(id).await?;
        current
            .status
            .ensure_can_transition_to(new_status)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

        let query = format!(
            "UPDATE food_orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .bind(new_status.as_str())
            .fetch_one(&self.pool)
            .await?;
        row.try_into()
    }

    /// Removes an order unconditionally. NotFound when it never existed.
    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM food_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Order", id));
        }
        Ok(())
    }
}
