//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use domain_guest::{CheckInRequest, Guest, GuestStatus, PaymentMode};
use domain_lodging::UnitRef;
use domain_orders::{LineItem, NewFoodOrder, OrderItem};

use crate::fixtures::TimeFixtures;

/// Builder for guest stays
pub struct TestGuestBuilder {
    name: String,
    mobile: String,
    city: String,
    payment_mode: PaymentMode,
    check_in_at: DateTime<Utc>,
    status: GuestStatus,
    unit: UnitRef,
    group_id: Option<Uuid>,
    total_bill: Decimal,
}

impl Default for TestGuestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGuestBuilder {
    /// Creates a builder with a random identity in Room 1, checked in at
    /// the fixture instant.
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            mobile: PhoneNumber().fake(),
            city: "Delhi".to_string(),
            payment_mode: PaymentMode::Cash,
            check_in_at: TimeFixtures::check_in(),
            status: GuestStatus::CheckedIn,
            unit: UnitRef::Room(1),
            group_id: None,
            total_bill: dec!(0),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn in_room(mut self, room_id: i64) -> Self {
        self.unit = UnitRef::Room(room_id);
        self
    }

    pub fn in_dorm_bed(mut self, bed_id: i64) -> Self {
        self.unit = UnitRef::DormBed(bed_id);
        self
    }

    pub fn with_payment_mode(mut self, mode: PaymentMode) -> Self {
        self.payment_mode = mode;
        self
    }

    pub fn checked_in_at(mut self, at: DateTime<Utc>) -> Self {
        self.check_in_at = at;
        self
    }

    pub fn in_group(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Builds the in-memory guest entity.
    pub fn build(self) -> Guest {
        Guest {
            id: Uuid::new_v4(),
            name: self.name,
            mobile: self.mobile,
            city: self.city,
            payment_mode: self.payment_mode,
            check_in_at: self.check_in_at,
            check_out_at: None,
            status: self.status,
            unit: self.unit,
            group_id: self.group_id,
            total_bill: self.total_bill,
        }
    }

    /// Builds the check-in request for this guest, for repository tests.
    pub fn build_request(self) -> CheckInRequest {
        CheckInRequest {
            name: self.name,
            mobile: self.mobile,
            city: self.city,
            payment_mode: self.payment_mode,
            unit: self.unit,
        }
    }
}

/// Builder for food orders
pub struct TestOrderBuilder {
    guest_id: Uuid,
    items: Vec<OrderItem>,
}

impl TestOrderBuilder {
    pub fn for_guest(guest_id: Uuid) -> Self {
        Self {
            guest_id,
            items: Vec::new(),
        }
    }

    pub fn with_line(mut self, name: &str, price: Decimal, qty: i64) -> Self {
        self.items.push(OrderItem::Line(LineItem {
            name: name.to_string(),
            price,
            qty,
        }));
        self
    }

    pub fn with_legacy_item(mut self, name: &str) -> Self {
        self.items.push(OrderItem::Name(name.to_string()));
        self
    }

    /// Prices and builds the order.
    pub fn build(self) -> NewFoodOrder {
        NewFoodOrder::place(self.guest_id, self.items)
    }
}
