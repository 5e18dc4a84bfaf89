//! Tests for the guest lifecycle domain

use chrono::Utc;
use rust_decimal_macros::dec;
use uuid::Uuid;

use domain_guest::{
    CheckInRequest, GroupCheckInPlan, GroupUnitOutcome, Guest, GuestError, GuestPatch,
    GuestStatus, PaymentMode, UnitResult,
};
use domain_lodging::UnitRef;

fn checked_in_guest() -> Guest {
    Guest {
        id: Uuid::new_v4(),
        name: "Rahul Sharma".to_string(),
        mobile: "9999999999".to_string(),
        city: "Delhi".to_string(),
        payment_mode: PaymentMode::Cash,
        check_in_at: Utc::now(),
        check_out_at: None,
        status: GuestStatus::CheckedIn,
        unit: UnitRef::Room(1),
        group_id: None,
        total_bill: dec!(0),
    }
}

#[test]
fn checkout_is_one_way() {
    let mut guest = checked_in_guest();
    assert!(guest.ensure_can_check_out().is_ok());

    guest.status = GuestStatus::CheckedOut;
    assert!(matches!(
        guest.ensure_can_check_out(),
        Err(GuestError::AlreadyCheckedOut(_))
    ));
}

#[test]
fn check_in_request_validates_name_and_unit() {
    assert!(matches!(
        CheckInRequest::new("", None, None, None, Some(1), None),
        Err(GuestError::MissingName)
    ));
    assert!(matches!(
        CheckInRequest::new("Asha", None, None, None, None, None),
        Err(GuestError::MissingUnit)
    ));

    let ok = CheckInRequest::new("Asha", None, None, Some(PaymentMode::Card), Some(2), None);
    assert_eq!(ok.unwrap().unit, UnitRef::Room(2));
}

#[test]
fn group_plan_shares_one_group_id_across_five_units() {
    let plan = GroupCheckInPlan::new("Lead", None, None, None, &[1, 2], &[10, 11, 12]).unwrap();

    assert_eq!(plan.unit_count(), 5);
    // One group id for the whole batch; each request is for a distinct unit.
    let units: Vec<_> = plan.requests.iter().map(|r| r.unit).collect();
    assert_eq!(units.len(), 5);
    assert!(units.contains(&UnitRef::Room(1)));
    assert!(units.contains(&UnitRef::DormBed(12)));
}

#[test]
fn two_plans_never_share_a_group_id() {
    let a = GroupCheckInPlan::new("Lead", None, None, None, &[1], &[]).unwrap();
    let b = GroupCheckInPlan::new("Lead", None, None, None, &[1], &[]).unwrap();
    assert_ne!(a.group_id, b.group_id);
}

#[test]
fn unit_result_json_omits_absent_fields() {
    let result = UnitResult::for_unit(UnitRef::Room(4), GroupUnitOutcome::Occupied);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "unit": { "room": 4 }, "outcome": "occupied" })
    );
}

#[test]
fn patch_knows_when_it_is_empty() {
    assert!(GuestPatch::default().is_empty());
    let patch = GuestPatch {
        city: Some("Mumbai".to_string()),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn payment_mode_round_trips_through_storage_form() {
    for mode in [PaymentMode::Cash, PaymentMode::Upi, PaymentMode::Card] {
        assert_eq!(mode.as_str().parse::<PaymentMode>().unwrap(), mode);
    }
    assert!("CHEQUE".parse::<PaymentMode>().is_err());
}
