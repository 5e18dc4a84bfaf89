//! Guest lifecycle repository
//!
//! Owns the transactional stay operations: check-in, check-out, group
//! batches, staff edits, and deletion. Every operation that pairs a guest
//! write with a unit status flip runs both inside one transaction, so a
//! concurrent dashboard read never sees a checked-in guest whose unit is
//! still AVAILABLE, or the reverse.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};
use uuid::Uuid;

use domain_billing::{compute_bill, BillSummary, BillingPolicy};
use domain_guest::{
    CheckInRequest, GroupCheckInPlan, GroupUnitOutcome, Guest, GuestPatch, GuestStatus,
    PaymentMode, UnitResult,
};
use domain_lodging::{BunkType, DormBed, Room, UnitRef, UnitStatus};
use domain_orders::FoodOrder;

use crate::error::DatabaseError;
use crate::repositories::lodging::{claim_unit, release_unit};
use crate::repositories::orders::{OrderRow, ORDER_COLUMNS};

pub(crate) const GUEST_COLUMNS: &str = "id, name, mobile, city, payment_mode, check_in_at, \
    check_out_at, status, room_id, dorm_bed_id, group_id, total_bill";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct GuestRow {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub payment_mode: String,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub status: String,
    pub room_id: Option<i64>,
    pub dorm_bed_id: Option<i64>,
    pub group_id: Option<Uuid>,
    pub total_bill: Decimal,
}

impl TryFrom<GuestRow> for Guest {
    type Error = DatabaseError;

    fn try_from(row: GuestRow) -> Result<Self, Self::Error> {
        let map_err =
            |e: domain_guest::GuestError| DatabaseError::SerializationError(e.to_string());
        let unit = UnitRef::from_ids(row.room_id, row.dorm_bed_id).ok_or_else(|| {
            DatabaseError::SerializationError(format!("guest {} has no unit", row.id))
        })?;
        Ok(Guest {
            id: row.id,
            name: row.name,
            mobile: row.mobile,
            city: row.city,
            payment_mode: row.payment_mode.parse::<PaymentMode>().map_err(map_err)?,
            check_in_at: row.check_in_at,
            check_out_at: row.check_out_at,
            status: row.status.parse::<GuestStatus>().map_err(map_err)?,
            unit,
            group_id: row.group_id,
            total_bill: row.total_bill,
        })
    }
}

/// A guest with the unit record it occupies, for list views
#[derive(Debug, Serialize)]
pub struct GuestWithUnit {
    #[serde(flatten)]
    pub guest: Guest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dorm_bed: Option<DormBed>,
}

#[derive(Debug, sqlx::FromRow)]
struct GuestUnitRow {
    id: Uuid,
    name: String,
    mobile: String,
    city: String,
    payment_mode: String,
    check_in_at: DateTime<Utc>,
    check_out_at: Option<DateTime<Utc>>,
    status: String,
    room_id: Option<i64>,
    dorm_bed_id: Option<i64>,
    group_id: Option<Uuid>,
    total_bill: Decimal,
    room_number: Option<String>,
    has_balcony: Option<bool>,
    room_price: Option<Decimal>,
    room_status: Option<String>,
    floor_number: Option<i32>,
    bed_number: Option<i32>,
    bunk_type: Option<String>,
    bed_price: Option<Decimal>,
    bed_status: Option<String>,
}

impl TryFrom<GuestUnitRow> for GuestWithUnit {
    type Error = DatabaseError;

    fn try_from(row: GuestUnitRow) -> Result<Self, Self::Error> {
        let lodging_err =
            |e: domain_lodging::LodgingError| DatabaseError::SerializationError(e.to_string());

        let room = match (row.room_id, &row.room_number) {
            (Some(id), Some(number)) => Some(Room {
                id,
                room_number: number.clone(),
                has_balcony: row.has_balcony.unwrap_or_default(),
                price: row.room_price.unwrap_or_default(),
                status: row
                    .room_status
                    .as_deref()
                    .unwrap_or(UnitStatus::Available.as_str())
                    .parse::<UnitStatus>()
                    .map_err(lodging_err)?,
            }),
            _ => None,
        };
        let dorm_bed = match (row.dorm_bed_id, row.floor_number, row.bed_number) {
            (Some(id), Some(floor_number), Some(bed_number)) => Some(DormBed {
                id,
                floor_number,
                bed_number,
                bunk_type: row
                    .bunk_type
                    .as_deref()
                    .unwrap_or(BunkType::Lower.as_str())
                    .parse::<BunkType>()
                    .map_err(lodging_err)?,
                price: row.bed_price.unwrap_or_default(),
                status: row
                    .bed_status
                    .as_deref()
                    .unwrap_or(UnitStatus::Available.as_str())
                    .parse::<UnitStatus>()
                    .map_err(lodging_err)?,
            }),
            _ => None,
        };

        let guest = Guest::try_from(GuestRow {
            id: row.id,
            name: row.name,
            mobile: row.mobile,
            city: row.city,
            payment_mode: row.payment_mode,
            check_in_at: row.check_in_at,
            check_out_at: row.check_out_at,
            status: row.status,
            room_id: row.room_id,
            dorm_bed_id: row.dorm_bed_id,
            group_id: row.group_id,
            total_bill: row.total_bill,
        })?;

        Ok(GuestWithUnit {
            guest,
            room,
            dorm_bed,
        })
    }
}

/// Who to check out: a guest directly, or whoever occupies a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutTarget {
    Guest(Uuid),
    Unit(UnitRef),
}

/// The result of a finalized checkout
#[derive(Debug, Serialize)]
pub struct CheckoutOutcome {
    pub guest: Guest,
    pub bill: BillSummary,
}

/// Nightly price configured on the unit a guest occupies.
async fn unit_price<'e, E>(executor: E, unit: UnitRef) -> Result<Decimal, DatabaseError>
where
    E: PgExecutor<'e>,
{
    let (query, id) = match unit {
        UnitRef::Room(id) => ("SELECT price FROM rooms WHERE id = $1", id),
        UnitRef::DormBed(id) => ("SELECT price FROM dorm_beds WHERE id = $1", id),
    };
    let price: Option<Decimal> = sqlx::query_scalar(query)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    // A missing unit prices at zero; the stay record is still closable.
    Ok(price.unwrap_or_default())
}

/// Repository for the guest lifecycle
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Checks a guest in: creates the stay record and occupies the unit in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// `NotFound` when the unit does not exist, `ConstraintViolation` when
    /// it is already occupied.
    pub async fn check_in(
        &self,
        request: &CheckInRequest,
        check_in_at: Option<DateTime<Utc>>,
    ) -> Result<Guest, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        claim_unit(&mut tx, request.unit).await?;
        let guest = insert_guest(&mut tx, request, None, check_in_at).await?;
        tx.commit().await?;

        tracing::info!(guest_id = %guest.id, unit = %guest.unit, "guest checked in");
        Ok(guest)
    }

    /// Checks a guest out: computes the final bill, closes the stay, and
    /// frees the unit in one transaction.
    ///
    /// The target may be the guest id, or a unit whose current checked-in
    /// occupant is resolved first.
    pub async fn check_out(
        &self,
        target: CheckoutTarget,
        policy: BillingPolicy,
    ) -> Result<CheckoutOutcome, DatabaseError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let guest = resolve_checkout_target(&mut tx, target).await?;
        guest
            .ensure_can_check_out()
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

        let outcome = finalize_checkout(&mut tx, guest, policy, now).await?;
        tx.commit().await?;

        tracing::info!(
            guest_id = %outcome.guest.id,
            total_bill = %outcome.bill.total_bill,
            "guest checked out"
        );
        Ok(outcome)
    }

    /// Checks the whole group plan in under one transaction, one shared
    /// group id. Units that are missing or occupied yield per-item failure
    /// entries; the rest of the batch proceeds.
    pub async fn group_check_in(
        &self,
        plan: &GroupCheckInPlan,
    ) -> Result<Vec<UnitResult>, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let mut results = Vec::with_capacity(plan.requests.len());

        for request in &plan.requests {
            match claim_unit(&mut tx, request.unit).await {
                Ok(()) => {
                    let guest = insert_guest(&mut tx, request, Some(plan.group_id), None).await?;
                    results.push(UnitResult::checked_in(request.unit, guest.id));
                }
                Err(DatabaseError::NotFound(_)) => {
                    results.push(UnitResult::for_unit(request.unit, GroupUnitOutcome::NotFound));
                }
                Err(DatabaseError::ConstraintViolation(_)) => {
                    results.push(UnitResult::for_unit(request.unit, GroupUnitOutcome::Occupied));
                }
                Err(other) => return Err(other),
            }
        }

        tx.commit().await?;

        tracing::info!(
            group_id = %plan.group_id,
            created = domain_guest::group::succeeded_count(&results),
            of = results.len(),
            "group check-in committed"
        );
        Ok(results)
    }

    /// Checks out each listed guest under one transaction. Guests that are
    /// missing or already checked out are skipped with a per-item entry.
    pub async fn group_check_out(
        &self,
        guest_ids: &[Uuid],
        policy: BillingPolicy,
    ) -> Result<Vec<UnitResult>, DatabaseError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;
        let mut results = Vec::with_capacity(guest_ids.len());

        for &guest_id in guest_ids {
            let row = fetch_guest_for_update(&mut tx, guest_id).await?;
            let Some(row) = row else {
                results.push(UnitResult::for_guest(guest_id, GroupUnitOutcome::NotFound));
                continue;
            };
            let guest: Guest = row.try_into()?;
            if !guest.is_checked_in() {
                results.push(UnitResult::for_guest(
                    guest_id,
                    GroupUnitOutcome::AlreadyCheckedOut,
                ));
                continue;
            }
            finalize_checkout(&mut tx, guest, policy, now).await?;
            results.push(UnitResult::for_guest(guest_id, GroupUnitOutcome::CheckedOut));
        }

        tx.commit().await?;
        Ok(results)
    }

    pub async fn find(&self, id: Uuid) -> Result<Guest, DatabaseError> {
        let query = format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = $1");
        let row = sqlx::query_as::<_, GuestRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Guest", id))?;
        row.try_into()
    }

    /// Guests with their unit records, newest check-in first, optionally
    /// filtered by status.
    pub async fn list(
        &self,
        status: Option<GuestStatus>,
    ) -> Result<Vec<GuestWithUnit>, DatabaseError> {
        let mut query = String::from(
            "SELECT g.id, g.name, g.mobile, g.city, g.payment_mode, g.check_in_at,
                    g.check_out_at, g.status, g.room_id, g.dorm_bed_id, g.group_id, g.total_bill,
                    r.room_number, r.has_balcony, r.price AS room_price, r.status AS room_status,
                    b.floor_number, b.bed_number, b.bunk_type, b.price AS bed_price,
                    b.status AS bed_status
             FROM guests g
             LEFT JOIN rooms r ON r.id = g.room_id
             LEFT JOIN dorm_beds b ON b.id = g.dorm_bed_id",
        );
        if status.is_some() {
            query.push_str(" WHERE g.status = $1");
        }
        query.push_str(" ORDER BY g.check_in_at DESC");

        let mut q = sqlx::query_as::<_, GuestUnitRow>(&query);
        if let Some(status) = status {
            q = q.bind(status.as_str());
        }
        let rows = q.fetch_all(&self.pool).await?;
        rows.into_iter().map(GuestWithUnit::try_from).collect()
    }

    /// Patches staff-editable fields. Absent fields are left untouched.
    pub async fn update_details(
        &self,
        id: Uuid,
        patch: &GuestPatch,
    ) -> Result<Guest, DatabaseError> {
        let query = format!(
            "UPDATE guests
             SET name = COALESCE($2, name),
                 mobile = COALESCE($3, mobile),
                 city = COALESCE($4, city),
                 payment_mode = COALESCE($5, payment_mode)
             WHERE id = $1
             RETURNING {GUEST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GuestRow>(&query)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.mobile.as_deref())
            .bind(patch.city.as_deref())
            .bind(patch.payment_mode.map(|m| m.as_str()))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Guest", id))?;
        row.try_into()
    }

    /// Deletes a guest: frees the unit when still checked in, removes the
    /// guest's orders, then the guest itself. One transaction, no soft
    /// delete.
    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = fetch_guest_for_update(&mut tx, id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Guest", id))?;
        let guest: Guest = row.try_into()?;

        if guest.is_checked_in() {
            release_unit(&mut tx, guest.unit).await?;
        }
        sqlx::query("DELETE FROM food_orders WHERE guest_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(guest_id = %id, "guest deleted");
        Ok(())
    }

    /// Everything a bill needs: the guest, the unit's nightly price, and
    /// the guest's orders. Used by the live bill preview.
    pub async fn bill_context(
        &self,
        id: Uuid,
    ) -> Result<(Guest, Decimal, Vec<FoodOrder>), DatabaseError> {
        let guest = self.find(id).await?;
        let price = unit_price(&self.pool, guest.unit).await?;

        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM food_orders WHERE guest_id = $1 ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        let orders = rows
            .into_iter()
            .map(FoodOrder::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((guest, price, orders))
    }
}

async fn fetch_guest_for_update(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
) -> Result<Option<GuestRow>, DatabaseError> {
    let query = format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = $1 FOR UPDATE");
    Ok(sqlx::query_as::<_, GuestRow>(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?)
}

async fn resolve_checkout_target(
    tx: &mut Transaction<'_, Postgres>,
    target: CheckoutTarget,
) -> Result<Guest, DatabaseError> {
    match target {
        CheckoutTarget::Guest(id) => {
            let row = fetch_guest_for_update(tx, id)
                .await?
                .ok_or_else(|| DatabaseError::not_found("Guest", id))?;
            row.try_into()
        }
        CheckoutTarget::Unit(unit) => {
            let (column, id) = match unit {
                UnitRef::Room(id) => ("room_id", id),
                UnitRef::DormBed(id) => ("dorm_bed_id", id),
            };
            let query = format!(
                "SELECT {GUEST_COLUMNS} FROM guests
                 WHERE {column} = $1 AND status = $2
                 ORDER BY check_in_at DESC
                 LIMIT 1
                 FOR UPDATE"
            );
            let row = sqlx::query_as::<_, GuestRow>(&query)
                .bind(id)
                .bind(GuestStatus::CheckedIn.as_str())
                .fetch_optional(&mut **tx)
                .await?
                .ok_or_else(|| {
                    DatabaseError::NotFound(format!("No guest checked in at {unit}"))
                })?;
            row.try_into()
        }
    }
}

async fn insert_guest(
    tx: &mut Transaction<'_, Postgres>,
    request: &CheckInRequest,
    group_id: Option<Uuid>,
    check_in_at: Option<DateTime<Utc>>,
) -> Result<Guest, DatabaseError> {
    let (room_id, dorm_bed_id) = request.unit.column_pair();
    let query = format!(
        "INSERT INTO guests
             (id, name, mobile, city, payment_mode, check_in_at, status,
              room_id, dorm_bed_id, group_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING {GUEST_COLUMNS}"
    );
    let row = sqlx::query_as::<_, GuestRow>(&query)
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.mobile)
        .bind(&request.city)
        .bind(request.payment_mode.as_str())
        .bind(check_in_at.unwrap_or_else(Utc::now))
        .bind(GuestStatus::CheckedIn.as_str())
        .bind(room_id)
        .bind(dorm_bed_id)
        .bind(group_id)
        .fetch_one(&mut **tx)
        .await?;
    row.try_into()
}

/// Applies the checkout writes for an already-resolved, checked-in guest:
/// recomputes the bill from order payloads, closes the stay, frees the unit.
async fn finalize_checkout(
    tx: &mut Transaction<'_, Postgres>,
    guest: Guest,
    policy: BillingPolicy,
    now: DateTime<Utc>,
) -> Result<CheckoutOutcome, DatabaseError> {
    let payloads: Vec<String> =
        sqlx::query_scalar("SELECT items FROM food_orders WHERE guest_id = $1")
            .bind(guest.id)
            .fetch_all(&mut **tx)
            .await?;
    let price = unit_price(&mut **tx, guest.unit).await?;

    let bill = compute_bill(guest.check_in_at, Some(now), price, &payloads, policy, now);

    let query = format!(
        "UPDATE guests
         SET status = $2, check_out_at = $3, total_bill = $4
         WHERE id = $1
         RETURNING {GUEST_COLUMNS}"
    );
    let row = sqlx::query_as::<_, GuestRow>(&query)
        .bind(guest.id)
        .bind(GuestStatus::CheckedOut.as_str())
        .bind(now)
        .bind(bill.total_bill)
        .fetch_one(&mut **tx)
        .await?;
    let updated: Guest = row.try_into()?;

    release_unit(tx, updated.unit).await?;

    Ok(CheckoutOutcome {
        guest: updated,
        bill,
    })
}
