//! Staff account repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use domain_staff::{NewStaff, Staff, StaffRole};

use crate::error::DatabaseError;

const STAFF_COLUMNS: &str = "id, username, password, role, created_at";

#[derive(Debug, sqlx::FromRow)]
struct StaffRow {
    id: Uuid,
    username: String,
    password: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<StaffRow> for Staff {
    type Error = DatabaseError;

    fn try_from(row: StaffRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<StaffRole>()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Ok(Staff {
            id: row.id,
            username: row.username,
            password: row.password,
            role,
            created_at: row.created_at,
        })
    }
}

/// Staff fields safe to list; never carries the password
#[derive(Debug, Clone, Serialize)]
pub struct StaffSummary {
    pub id: Uuid,
    pub username: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

impl From<Staff> for StaffSummary {
    fn from(staff: Staff) -> Self {
        StaffSummary {
            id: staff.id,
            username: staff.username,
            role: staff.role,
            created_at: staff.created_at,
        }
    }
}

/// Repository for staff accounts
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<StaffSummary>, DatabaseError> {
        let query = format!("SELECT {STAFF_COLUMNS} FROM staff ORDER BY created_at ASC");
        let rows = sqlx::query_as::<_, StaffRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|row| Staff::try_from(row).map(StaffSummary::from))
            .collect()
    }

    /// Full account including the stored password, for login comparison.
    pub async fn find_by_username(&self, username: &str) -> Result<Staff, DatabaseError> {
        let query = format!("SELECT {STAFF_COLUMNS} FROM staff WHERE username = $1");
        let row = sqlx::query_as::<_, StaffRow>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Staff", username))?;
        row.try_into()
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// `DuplicateEntry` when the username is taken.
    pub async fn create(&self, staff: &NewStaff) -> Result<StaffSummary, DatabaseError> {
        let query = format!(
            "INSERT INTO staff (id, username, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {STAFF_COLUMNS}"
        );
        let row = sqlx::query_as::<_, StaffRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&staff.username)
            .bind(&staff.password)
            .bind(staff.role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match DatabaseError::from(&e) {
                DatabaseError::DuplicateEntry(_) => {
                    DatabaseError::duplicate("Staff", "username", &staff.username)
                }
                other => other,
            })?;
        Staff::try_from(row).map(StaffSummary::from)
    }

    pub async fn update_password(&self, id: Uuid, password: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE staff SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(password)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Staff", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Staff", id));
        }
        Ok(())
    }

    /// Creates the account only when the username is free. Used by seeding.
    pub async fn create_if_absent(&self, staff: &NewStaff) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO staff (id, username, password, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(&staff.username)
        .bind(&staff.password)
        .bind(staff.role.as_str())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
