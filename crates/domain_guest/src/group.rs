//! Group booking coordination - pure parts
//!
//! A group booking applies the single check-in to a batch of units under one
//! shared group id. The storage layer runs the batch in one transaction;
//! this module plans the batch and shapes its per-item outcome.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_lodging::UnitRef;

use crate::error::GuestError;
use crate::guest::{CheckInRequest, PaymentMode};

/// A planned group check-in: the shared group id plus one check-in request
/// per unit, all carrying the same lead-guest details
#[derive(Debug, Clone)]
pub struct GroupCheckInPlan {
    pub group_id: Uuid,
    pub requests: Vec<CheckInRequest>,
}

impl GroupCheckInPlan {
    /// Plans a group check-in over the given rooms and beds.
    ///
    /// Fails with a validation error when no units are selected or the lead
    /// guest has no name; unit order is rooms first, then beds, matching
    /// the original booking flow.
    pub fn new(
        name: impl Into<String>,
        mobile: Option<String>,
        city: Option<String>,
        payment_mode: Option<PaymentMode>,
        room_ids: &[i64],
        dorm_bed_ids: &[i64],
    ) -> Result<Self, GuestError> {
        if room_ids.is_empty() && dorm_bed_ids.is_empty() {
            return Err(GuestError::EmptyGroup);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GuestError::MissingName);
        }
        let mobile = mobile.unwrap_or_default();
        let city = city.unwrap_or_default();
        let payment_mode = payment_mode.unwrap_or_default();

        let units = room_ids
            .iter()
            .map(|id| UnitRef::Room(*id))
            .chain(dorm_bed_ids.iter().map(|id| UnitRef::DormBed(*id)));

        let requests = units
            .map(|unit| CheckInRequest {
                name: name.clone(),
                mobile: mobile.clone(),
                city: city.clone(),
                payment_mode,
                unit,
            })
            .collect();

        Ok(Self {
            group_id: Uuid::new_v4(),
            requests,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.requests.len()
    }
}

/// What happened to one unit of a group operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupUnitOutcome {
    /// Guest created and unit occupied
    CheckedIn,
    /// Guest checked out and unit released
    CheckedOut,
    /// Unit was not AVAILABLE; skipped
    Occupied,
    /// Unit or guest does not exist; skipped
    NotFound,
    /// Guest was already checked out; skipped
    AlreadyCheckedOut,
}

impl GroupUnitOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, GroupUnitOutcome::CheckedIn | GroupUnitOutcome::CheckedOut)
    }
}

/// Per-item result row returned by group operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitResult {
    /// The unit (group check-in) or guest (group check-out) acted on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<Uuid>,
    pub outcome: GroupUnitOutcome,
}

impl UnitResult {
    pub fn for_unit(unit: UnitRef, outcome: GroupUnitOutcome) -> Self {
        Self {
            unit: Some(unit),
            guest_id: None,
            outcome,
        }
    }

    pub fn for_guest(guest_id: Uuid, outcome: GroupUnitOutcome) -> Self {
        Self {
            unit: None,
            guest_id: Some(guest_id),
            outcome,
        }
    }

    pub fn checked_in(unit: UnitRef, guest_id: Uuid) -> Self {
        Self {
            unit: Some(unit),
            guest_id: Some(guest_id),
            outcome: GroupUnitOutcome::CheckedIn,
        }
    }
}

/// Number of successful items in a result list.
pub fn succeeded_count(results: &[UnitResult]) -> usize {
    results.iter().filter(|r| r.outcome.succeeded()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_orders_rooms_before_beds() {
        let plan =
            GroupCheckInPlan::new("Lead", None, None, None, &[1, 2], &[10, 11, 12]).unwrap();
        assert_eq!(plan.unit_count(), 5);
        assert_eq!(plan.requests[0].unit, UnitRef::Room(1));
        assert_eq!(plan.requests[2].unit, UnitRef::DormBed(10));
    }

    #[test]
    fn plan_rejects_empty_selection() {
        let result = GroupCheckInPlan::new("Lead", None, None, None, &[], &[]);
        assert!(matches!(result, Err(GuestError::EmptyGroup)));
    }

    #[test]
    fn every_request_carries_the_lead_details() {
        let plan = GroupCheckInPlan::new(
            "Lead",
            Some("9876543210".to_string()),
            Some("Jaipur".to_string()),
            Some(PaymentMode::Upi),
            &[1],
            &[5],
        )
        .unwrap();
        assert!(plan
            .requests
            .iter()
            .all(|r| r.name == "Lead" && r.mobile == "9876543210" && r.payment_mode == PaymentMode::Upi));
    }

    #[test]
    fn succeeded_count_ignores_skips() {
        let results = vec![
            UnitResult::for_unit(UnitRef::Room(1), GroupUnitOutcome::CheckedIn),
            UnitResult::for_unit(UnitRef::Room(2), GroupUnitOutcome::Occupied),
            UnitResult::for_unit(UnitRef::DormBed(3), GroupUnitOutcome::NotFound),
        ];
        assert_eq!(succeeded_count(&results), 1);
    }
}
