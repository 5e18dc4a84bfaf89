//! Accommodation inventory repository
//!
//! Rooms and dorm beds with their occupancy status, plus the transactional
//! claim/release helpers the guest lifecycle composes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use domain_guest::GuestStatus;
use domain_lodging::{BunkType, DormBed, NewDormBed, NewRoom, Room, UnitRef, UnitStatus};

use crate::error::DatabaseError;

const ROOM_COLUMNS: &str = "id, room_number, has_balcony, price, status";
const BED_COLUMNS: &str = "id, floor_number, bed_number, bunk_type, price, status";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RoomRow {
    pub id: i64,
    pub room_number: String,
    pub has_balcony: bool,
    pub price: Decimal,
    pub status: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = DatabaseError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let status: UnitStatus = row
            .status
            .parse()
            .map_err(|e: domain_lodging::LodgingError| {
                DatabaseError::SerializationError(e.to_string())
            })?;
        Ok(Room {
            id: row.id,
            room_number: row.room_number,
            has_balcony: row.has_balcony,
            price: row.price,
            status,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BedRow {
    pub id: i64,
    pub floor_number: i32,
    pub bed_number: i32,
    pub bunk_type: String,
    pub price: Decimal,
    pub status: String,
}

impl TryFrom<BedRow> for DormBed {
    type Error = DatabaseError;

    fn try_from(row: BedRow) -> Result<Self, Self::Error> {
        let map_err =
            |e: domain_lodging::LodgingError| DatabaseError::SerializationError(e.to_string());
        Ok(DormBed {
            id: row.id,
            floor_number: row.floor_number,
            bed_number: row.bed_number,
            bunk_type: row.bunk_type.parse::<BunkType>().map_err(map_err)?,
            price: row.price,
            status: row.status.parse::<UnitStatus>().map_err(map_err)?,
        })
    }
}

/// The occupant fields shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct OccupantSummary {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub check_in_at: DateTime<Utc>,
    pub group_id: Option<Uuid>,
}

/// A room together with its currently checked-in guest, if any
#[derive(Debug, Serialize)]
pub struct RoomWithGuest {
    #[serde(flatten)]
    pub room: Room,
    pub guest: Option<OccupantSummary>,
}

/// A dorm bed together with its currently checked-in guest, if any
#[derive(Debug, Serialize)]
pub struct BedWithGuest {
    #[serde(flatten)]
    pub bed: DormBed,
    pub guest: Option<OccupantSummary>,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomDashboardRow {
    id: i64,
    room_number: String,
    has_balcony: bool,
    price: Decimal,
    status: String,
    guest_id: Option<Uuid>,
    guest_name: Option<String>,
    guest_mobile: Option<String>,
    guest_check_in_at: Option<DateTime<Utc>>,
    guest_group_id: Option<Uuid>,
}

#[derive(Debug, sqlx::FromRow)]
struct BedDashboardRow {
    id: i64,
    floor_number: i32,
    bed_number: i32,
    bunk_type: String,
    price: Decimal,
    status: String,
    guest_id: Option<Uuid>,
    guest_name: Option<String>,
    guest_mobile: Option<String>,
    guest_check_in_at: Option<DateTime<Utc>>,
    guest_group_id: Option<Uuid>,
}

fn occupant_from_parts(
    id: Option<Uuid>,
    name: Option<String>,
    mobile: Option<String>,
    check_in_at: Option<DateTime<Utc>>,
    group_id: Option<Uuid>,
) -> Option<OccupantSummary> {
    Some(OccupantSummary {
        id: id?,
        name: name.unwrap_or_default(),
        mobile: mobile.unwrap_or_default(),
        check_in_at: check_in_at?,
        group_id,
    })
}

fn unit_table(unit: UnitRef) -> (&'static str, &'static str, i64) {
    match unit {
        UnitRef::Room(id) => ("rooms", "Room", id),
        UnitRef::DormBed(id) => ("dorm_beds", "Dorm bed", id),
    }
}

/// Occupies a unit, failing unless it is currently AVAILABLE.
///
/// The row is locked for the remainder of the transaction, so two
/// concurrent check-ins against the same unit serialize here and the loser
/// sees OCCUPIED. NotFound when the unit does not exist.
pub(crate) async fn claim_unit(
    tx: &mut Transaction<'_, Postgres>,
    unit: UnitRef,
) -> Result<(), DatabaseError> {
    let (table, entity, id) = unit_table(unit);

    let query = format!("SELECT status FROM {table} WHERE id = $1 FOR UPDATE");
    let status: Option<String> = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

    match status.as_deref() {
        None => Err(DatabaseError::not_found(entity, id)),
        Some(s) if s != UnitStatus::Available.as_str() => Err(DatabaseError::ConstraintViolation(
            format!("{} {} is already occupied", entity, id),
        )),
        Some(_) => {
            let query = format!("UPDATE {table} SET status = $2 WHERE id = $1");
            sqlx::query(&query)
                .bind(id)
                .bind(UnitStatus::Occupied.as_str())
                .execute(&mut **tx)
                .await?;
            Ok(())
        }
    }
}

/// Returns a unit to AVAILABLE. Missing units are ignored: release runs
/// while freeing deleted or checked-out guests and must not fail the
/// surrounding transaction.
pub(crate) async fn release_unit(
    tx: &mut Transaction<'_, Postgres>,
    unit: UnitRef,
) -> Result<(), DatabaseError> {
    let (table, _, id) = unit_table(unit);
    let query = format!("UPDATE {table} SET status = $2 WHERE id = $1");
    sqlx::query(&query)
        .bind(id)
        .bind(UnitStatus::Available.as_str())
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Repository for rooms and dorm beds
#[derive(Debug, Clone)]
pub struct LodgingRepository {
    pool: PgPool,
}

impl LodgingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rooms with their checked-in occupant, for the dashboard.
    pub async fn rooms_with_guests(&self) -> Result<Vec<RoomWithGuest>, DatabaseError> {
        let rows = sqlx::query_as::<_, RoomDashboardRow>(
            "SELECT r.id, r.room_number, r.has_balcony, r.price, r.status,
                    g.id AS guest_id, g.name AS guest_name, g.mobile AS guest_mobile,
                    g.check_in_at AS guest_check_in_at, g.group_id AS guest_group_id
             FROM rooms r
             LEFT JOIN guests g ON g.room_id = r.id AND g.status = $1
             ORDER BY r.id ASC",
        )
        .bind(GuestStatus::CheckedIn.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let guest = occupant_from_parts(
                    row.guest_id,
                    row.guest_name,
                    row.guest_mobile,
                    row.guest_check_in_at,
                    row.guest_group_id,
                );
                let room = Room::try_from(RoomRow {
                    id: row.id,
                    room_number: row.room_number,
                    has_balcony: row.has_balcony,
                    price: row.price,
                    status: row.status,
                })?;
                Ok(RoomWithGuest { room, guest })
            })
            .collect()
    }

    /// All dorm beds with their checked-in occupant, for the dashboard.
    pub async fn beds_with_guests(&self) -> Result<Vec<BedWithGuest>, DatabaseError> {
        let rows = sqlx::query_as::<_, BedDashboardRow>(
            "SELECT b.id, b.floor_number, b.bed_number, b.bunk_type, b.price, b.status,
                    g.id AS guest_id, g.name AS guest_name, g.mobile AS guest_mobile,
                    g.check_in_at AS guest_check_in_at, g.group_id AS guest_group_id
             FROM dorm_beds b
             LEFT JOIN guests g ON g.dorm_bed_id = b.id AND g.status = $1
             ORDER BY b.id ASC",
        )
        .bind(GuestStatus::CheckedIn.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let guest = occupant_from_parts(
                    row.guest_id,
                    row.guest_name,
                    row.guest_mobile,
                    row.guest_check_in_at,
                    row.guest_group_id,
                );
                let bed = DormBed::try_from(BedRow {
                    id: row.id,
                    floor_number: row.floor_number,
                    bed_number: row.bed_number,
                    bunk_type: row.bunk_type,
                    price: row.price,
                    status: row.status,
                })?;
                Ok(BedWithGuest { bed, guest })
            })
            .collect()
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, DatabaseError> {
        let query = format!("SELECT {ROOM_COLUMNS} FROM rooms ORDER BY id ASC");
        let rows = sqlx::query_as::<_, RoomRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Room::try_from).collect()
    }

    pub async fn list_beds(&self) -> Result<Vec<DormBed>, DatabaseError> {
        let query = format!("SELECT {BED_COLUMNS} FROM dorm_beds ORDER BY id ASC");
        let rows = sqlx::query_as::<_, BedRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(DormBed::try_from).collect()
    }

    pub async fn find_room(&self, id: i64) -> Result<Room, DatabaseError> {
        let query = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1");
        let row = sqlx::query_as::<_, RoomRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Room", id))?;
        row.try_into()
    }

    pub async fn find_bed(&self, id: i64) -> Result<DormBed, DatabaseError> {
        let query = format!("SELECT {BED_COLUMNS} FROM dorm_beds WHERE id = $1");
        let row = sqlx::query_as::<_, BedRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Dorm bed", id))?;
        row.try_into()
    }

    /// Sets a unit's status with no transition validation, per the
    /// inventory contract. NotFound when the unit does not exist.
    pub async fn set_status(&self, unit: UnitRef, status: UnitStatus) -> Result<(), DatabaseError> {
        let (table, entity, id) = unit_table(unit);
        let query = format!("UPDATE {table} SET status = $2 WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(entity, id));
        }
        Ok(())
    }

    /// Upserts a room by its unique number, updating the price on conflict.
    /// Used by seeding.
    pub async fn upsert_room(&self, room: &NewRoom) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO rooms (room_number, has_balcony, price)
             VALUES ($1, $2, $3)
             ON CONFLICT (room_number) DO UPDATE SET price = EXCLUDED.price",
        )
        .bind(&room.room_number)
        .bind(room.has_balcony)
        .bind(room.price)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Replaces the entire bed inventory. Used by seeding; fails if any
    /// bed is still referenced by a guest record.
    pub async fn regenerate_beds(&self, beds: &[NewDormBed]) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM dorm_beds").execute(&mut *tx).await?;
        for bed in beds {
            sqlx::query(
                "INSERT INTO dorm_beds (floor_number, bed_number, bunk_type, price)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(bed.floor_number)
            .bind(bed.bed_number)
            .bind(bed.bunk_type.as_str())
            .bind(bed.price)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(beds.len() as u64)
    }
}
