//! Menu item repository

use rust_decimal::Decimal;
use sqlx::PgPool;

use domain_orders::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::error::DatabaseError;

const MENU_COLUMNS: &str = "id, name, category, price, is_available";

#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    category: String,
    price: Decimal,
    is_available: bool,
}

impl From<MenuRow> for MenuItem {
    fn from(row: MenuRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            is_available: row.is_available,
        }
    }
}

/// Repository for the menu
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: PgPool,
}

impl MenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All menu items grouped the way the menu page shows them.
    pub async fn list(&self) -> Result<Vec<MenuItem>, DatabaseError> {
        let query = format!("SELECT {MENU_COLUMNS} FROM menu_items ORDER BY category ASC, id ASC");
        let rows = sqlx::query_as::<_, MenuRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    pub async fn find(&self, id: i64) -> Result<MenuItem, DatabaseError> {
        let query = format!("SELECT {MENU_COLUMNS} FROM menu_items WHERE id = $1");
        let row = sqlx::query_as::<_, MenuRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Menu item", id))?;
        Ok(row.into())
    }

    /// Creates an item, available by default.
    pub async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DatabaseError> {
        let query = format!(
            "INSERT INTO menu_items (name, category, price, is_available)
             VALUES ($1, $2, $3, TRUE)
             RETURNING {MENU_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MenuRow>(&query)
            .bind(&item.name)
            .bind(&item.category)
            .bind(item.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    /// Patches an item; absent fields are left untouched.
    pub async fn update(&self, id: i64, patch: &MenuItemPatch) -> Result<MenuItem, DatabaseError> {
        let query = format!(
            "UPDATE menu_items
             SET name = COALESCE($2, name),
                 category = COALESCE($3, category),
                 price = COALESCE($4, price),
                 is_available = COALESCE($5, is_available)
             WHERE id = $1
             RETURNING {MENU_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MenuRow>(&query)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.category.as_deref())
            .bind(patch.price)
            .bind(patch.is_available)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Menu item", id))?;
        Ok(row.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Menu item", id));
        }
        Ok(())
    }

    /// Inserts an item only when no item of that name exists yet. Used by
    /// seeding so reseeds never duplicate the menu.
    pub async fn insert_if_absent(&self, item: &NewMenuItem) -> Result<bool, DatabaseError> {
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM menu_items WHERE name = $1")
            .bind(&item.name)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }
        self.create(item).await?;
        Ok(true)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
