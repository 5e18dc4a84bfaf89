//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are deterministic
//! where it matters (timestamps, prices) so assertions stay predictable.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use domain_guest::{Guest, GuestStatus, PaymentMode};
use domain_lodging::{BunkType, DormBed, Room, UnitRef, UnitStatus};
use domain_orders::{FoodOrder, LineItem, OrderItem, OrderStatus};

/// Fixture timestamps
pub struct TimeFixtures;

impl TimeFixtures {
    /// Standard check-in instant (Mar 1, 2025, 12:00 UTC)
    pub fn check_in() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    /// Two days after the standard check-in
    pub fn check_out_two_days() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap()
    }
}

/// Fixture accommodation units
pub struct UnitFixtures;

impl UnitFixtures {
    /// Room 1, standard, available
    pub fn room() -> Room {
        Room {
            id: 1,
            room_number: "Room 1".to_string(),
            has_balcony: false,
            price: dec!(2000),
            status: UnitStatus::Available,
        }
    }

    /// Room 3, balcony, available
    pub fn balcony_room() -> Room {
        Room {
            id: 3,
            room_number: "Room 3".to_string(),
            has_balcony: true,
            price: dec!(2500),
            status: UnitStatus::Available,
        }
    }

    /// Floor-2 lower-bunk bed, available
    pub fn dorm_bed() -> DormBed {
        DormBed {
            id: 7,
            floor_number: 2,
            bed_number: 7,
            bunk_type: BunkType::Lower,
            price: dec!(500),
            status: UnitStatus::Available,
        }
    }
}

/// Fixture guests
pub struct GuestFixtures;

impl GuestFixtures {
    /// A checked-in guest occupying Room 1
    pub fn checked_in() -> Guest {
        Guest {
            id: Uuid::new_v4(),
            name: "Rahul Sharma".to_string(),
            mobile: "9876543210".to_string(),
            city: "Delhi".to_string(),
            payment_mode: PaymentMode::Cash,
            check_in_at: TimeFixtures::check_in(),
            check_out_at: None,
            status: GuestStatus::CheckedIn,
            unit: UnitRef::Room(1),
            group_id: None,
            total_bill: dec!(0),
        }
    }

    /// A guest whose stay has been closed
    pub fn checked_out() -> Guest {
        Guest {
            check_out_at: Some(TimeFixtures::check_out_two_days()),
            status: GuestStatus::CheckedOut,
            total_bill: dec!(20),
            ..Self::checked_in()
        }
    }
}

/// Fixture orders
pub struct OrderFixtures;

impl OrderFixtures {
    /// Tea x2 at 10, the reference order
    pub fn tea_for_two(guest_id: Uuid) -> FoodOrder {
        FoodOrder {
            id: Uuid::new_v4(),
            guest_id,
            items: vec![OrderItem::Line(LineItem {
                name: "Tea".to_string(),
                price: dec!(10),
                qty: 2,
            })],
            total_amount: dec!(20),
            status: OrderStatus::Pending,
            created_at: TimeFixtures::check_in(),
        }
    }

    /// A legacy order: names only, stored total from the fallback menu
    pub fn legacy(guest_id: Uuid) -> FoodOrder {
        FoodOrder {
            id: Uuid::new_v4(),
            guest_id,
            items: vec![
                OrderItem::Name("Burger".to_string()),
                OrderItem::Name("Coke".to_string()),
            ],
            total_amount: dec!(200),
            status: OrderStatus::Pending,
            created_at: TimeFixtures::check_in(),
        }
    }

    /// The stored payload text of an order
    pub fn payload(order: &FoodOrder) -> String {
        domain_orders::line_items::to_payload(&order.items)
    }
}

/// Common money values
pub struct PriceFixtures;

impl PriceFixtures {
    pub fn standard_room() -> Decimal {
        dec!(2000)
    }

    pub fn balcony_room() -> Decimal {
        dec!(2500)
    }

    pub fn dorm_bed() -> Decimal {
        dec!(500)
    }
}
