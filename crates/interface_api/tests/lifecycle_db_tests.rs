//! End-to-end lifecycle tests against containerized Postgres
//!
//! These need a local Docker daemon, so they are `#[ignore]`d by default:
//!
//! ```bash
//! cargo test -p interface_api --test lifecycle_db_tests -- --ignored
//! ```

use rust_decimal_macros::dec;
use uuid::Uuid;

use domain_billing::BillingPolicy;
use domain_guest::{GroupCheckInPlan, GroupUnitOutcome, PaymentMode};
use domain_lodging::{UnitRef, UnitStatus};
use domain_orders::OrderStatus;
use infra_db::{
    CheckoutTarget, GuestRepository, LodgingRepository, MaintenanceRepository, OrderRepository,
};
use test_utils::{
    assert_checked_in, assert_checked_out, shared_test_database, TestGuestBuilder,
    TestOrderBuilder,
};

async fn fresh_database() -> std::sync::Arc<test_utils::TestDatabase> {
    let db = shared_test_database().await.expect("docker postgres");
    db.clear_data().await.expect("clear");
    db.seed().await.expect("seed");
    db
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn check_in_creates_guest_and_occupies_room() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let lodging = LodgingRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(1).build_request();
    let guest = guests.check_in(&request, None).await.expect("check in");

    assert_checked_in(&guest);
    assert_eq!(guest.unit, UnitRef::Room(1));
    let room = lodging.find_room(1).await.unwrap();
    assert_eq!(room.status, UnitStatus::Occupied);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn double_booking_is_rejected() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());

    let first = TestGuestBuilder::new().in_room(2).build_request();
    guests.check_in(&first, None).await.expect("first check in");

    let second = TestGuestBuilder::new().in_room(2).build_request();
    let result = guests.check_in(&second, None).await;
    assert!(matches!(
        result,
        Err(infra_db::DatabaseError::ConstraintViolation(_))
    ));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn two_day_stay_with_tea_bills_twenty_and_frees_the_room() {
    // The reference scenario: seeded layout, Rahul Sharma in Room 1,
    // Tea x2 at 10, checked out two days later, food-only policy.
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let lodging = LodgingRepository::new(db.pool().clone());
    let orders = OrderRepository::new(db.pool().clone());

    let two_days_ago = chrono::Utc::now() - chrono::Duration::days(2);
    let request = TestGuestBuilder::new()
        .with_name("Rahul Sharma")
        .in_room(1)
        .build_request();
    let guest = guests
        .check_in(&request, Some(two_days_ago))
        .await
        .expect("check in");

    let order = TestOrderBuilder::for_guest(guest.id)
        .with_line("Tea", dec!(10), 2)
        .build();
    let placed = orders.place(&order).await.expect("order");
    assert_eq!(placed.total_amount, dec!(20));

    let outcome = guests
        .check_out(CheckoutTarget::Guest(guest.id), BillingPolicy::food_only())
        .await
        .expect("check out");

    assert_checked_out(&outcome.guest);
    assert_eq!(outcome.bill.nights, 2);
    assert_eq!(outcome.bill.food_total, dec!(20));
    assert_eq!(outcome.bill.accommodation_total, dec!(0));
    assert_eq!(outcome.guest.total_bill, dec!(20));

    let room = lodging.find_room(1).await.unwrap();
    assert_eq!(room.status, UnitStatus::Available);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn checkout_by_room_resolves_the_occupant() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(3).build_request();
    let guest = guests.check_in(&request, None).await.expect("check in");

    let outcome = guests
        .check_out(
            CheckoutTarget::Unit(UnitRef::Room(3)),
            BillingPolicy::food_only(),
        )
        .await
        .expect("check out by room");
    assert_eq!(outcome.guest.id, guest.id);

    // Nobody left in the room now.
    let again = guests
        .check_out(
            CheckoutTarget::Unit(UnitRef::Room(3)),
            BillingPolicy::food_only(),
        )
        .await;
    assert!(matches!(again, Err(infra_db::DatabaseError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn group_check_in_creates_five_guests_under_one_group() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let lodging = LodgingRepository::new(db.pool().clone());

    let beds: Vec<i64> = lodging
        .list_beds()
        .await
        .unwrap()
        .iter()
        .take(3)
        .map(|b| b.id)
        .collect();

    let plan = GroupCheckInPlan::new(
        "Tour Lead",
        Some("9000000000".to_string()),
        None,
        Some(PaymentMode::Upi),
        &[1, 2],
        &beds,
    )
    .unwrap();

    let results = guests.group_check_in(&plan).await.expect("group check in");
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.outcome == GroupUnitOutcome::CheckedIn));

    let listed = guests.list(None).await.unwrap();
    let in_group: Vec<_> = listed
        .iter()
        .filter(|g| g.guest.group_id == Some(plan.group_id))
        .collect();
    assert_eq!(in_group.len(), 5);

    for room_id in [1, 2] {
        let room = lodging.find_room(room_id).await.unwrap();
        assert_eq!(room.status, UnitStatus::Occupied);
    }
    for bed_id in beds {
        let bed = lodging.find_bed(bed_id).await.unwrap();
        assert_eq!(bed.status, UnitStatus::Occupied);
    }
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn group_check_in_reports_occupied_units_per_item() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());

    let blocker = TestGuestBuilder::new().in_room(1).build_request();
    guests.check_in(&blocker, None).await.expect("blocker");

    let plan = GroupCheckInPlan::new("Lead", None, None, None, &[1, 2], &[]).unwrap();
    let results = guests.group_check_in(&plan).await.expect("group");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].outcome, GroupUnitOutcome::Occupied);
    assert_eq!(results[1].outcome, GroupUnitOutcome::CheckedIn);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn group_check_out_skips_missing_and_closed_guests() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(4).build_request();
    let active = guests.check_in(&request, None).await.expect("check in");

    let ghost = Uuid::new_v4();
    let results = guests
        .group_check_out(&[active.id, ghost], BillingPolicy::food_only())
        .await
        .expect("group check out");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].outcome, GroupUnitOutcome::CheckedOut);
    assert_eq!(results[1].outcome, GroupUnitOutcome::NotFound);

    // A second pass skips the now-closed guest.
    let again = guests
        .group_check_out(&[active.id], BillingPolicy::food_only())
        .await
        .unwrap();
    assert_eq!(again[0].outcome, GroupUnitOutcome::AlreadyCheckedOut);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn deleting_a_checked_in_guest_frees_unit_and_orders() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let lodging = LodgingRepository::new(db.pool().clone());
    let orders = OrderRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(2).build_request();
    let guest = guests.check_in(&request, None).await.expect("check in");
    let order = TestOrderBuilder::for_guest(guest.id)
        .with_line("Maggi", dec!(40), 1)
        .build();
    let placed = orders.place(&order).await.expect("order");

    guests.delete(guest.id).await.expect("delete");

    let room = lodging.find_room(2).await.unwrap();
    assert_eq!(room.status, UnitStatus::Available);
    assert!(matches!(
        orders.find(placed.id).await,
        Err(infra_db::DatabaseError::NotFound(_))
    ));
    assert!(matches!(
        guests.find(guest.id).await,
        Err(infra_db::DatabaseError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn order_status_moves_forward_only() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let orders = OrderRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(1).build_request();
    let guest = guests.check_in(&request, None).await.unwrap();
    let placed = orders
        .place(
            &TestOrderBuilder::for_guest(guest.id)
                .with_line("Chai", dec!(20), 1)
                .build(),
        )
        .await
        .unwrap();

    let completed = orders
        .update_status(placed.id, OrderStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    let backward = orders.update_status(placed.id, OrderStatus::Pending).await;
    assert!(matches!(
        backward,
        Err(infra_db::DatabaseError::ConstraintViolation(_))
    ));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn set_status_applies_without_transition_checks() {
    // The inventory contract: status writes are unvalidated at this layer.
    let db = fresh_database().await;
    let lodging = LodgingRepository::new(db.pool().clone());

    lodging
        .set_status(UnitRef::Room(1), UnitStatus::Occupied)
        .await
        .expect("occupy");
    assert_eq!(lodging.find_room(1).await.unwrap().status, UnitStatus::Occupied);

    lodging
        .set_status(UnitRef::Room(1), UnitStatus::Available)
        .await
        .expect("free");

    let missing = lodging.set_status(UnitRef::Room(999), UnitStatus::Occupied).await;
    assert!(matches!(missing, Err(infra_db::DatabaseError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn reset_clears_guests_and_frees_every_unit() {
    let db = fresh_database().await;
    let guests = GuestRepository::new(db.pool().clone());
    let lodging = LodgingRepository::new(db.pool().clone());
    let maintenance = MaintenanceRepository::new(db.pool().clone());

    let request = TestGuestBuilder::new().in_room(1).build_request();
    let guest = guests.check_in(&request, None).await.unwrap();
    let orders = OrderRepository::new(db.pool().clone());
    orders
        .place(
            &TestOrderBuilder::for_guest(guest.id)
                .with_line("Tea", dec!(10), 1)
                .build(),
        )
        .await
        .unwrap();

    let report = maintenance.reset_guest_data().await.expect("reset");
    assert_eq!(report.guests_deleted, 1);
    assert_eq!(report.orders_deleted, 1);

    assert!(guests.list(None).await.unwrap().is_empty());
    assert!(lodging
        .list_rooms()
        .await
        .unwrap()
        .iter()
        .all(|room| room.status == UnitStatus::Available));
}
