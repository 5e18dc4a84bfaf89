//! The standard hostel layout used by seeding
//!
//! Four private rooms (two standard, two with balcony) and 22 dorm beds
//! across floors 2 and 3. Seeding upserts rooms by number and regenerates
//! beds wholesale.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::dorm_bed::{BunkType, NewDormBed};
use crate::room::NewRoom;

pub const STANDARD_ROOM_PRICE: Decimal = dec!(2000);
pub const BALCONY_ROOM_PRICE: Decimal = dec!(2500);
pub const DORM_BED_PRICE: Decimal = dec!(500);

/// The four seeded rooms: 1 and 2 standard, 3 and 4 with balcony.
pub fn standard_rooms() -> Vec<NewRoom> {
    (1..=4)
        .map(|n| NewRoom {
            room_number: format!("Room {}", n),
            has_balcony: n > 2,
            price: if n > 2 {
                BALCONY_ROOM_PRICE
            } else {
                STANDARD_ROOM_PRICE
            },
        })
        .collect()
}

/// The seeded dorm beds: 10 on floor 2 and 12 on floor 3, bunk type
/// alternating by bed-number parity.
pub fn standard_dorm_beds() -> Vec<NewDormBed> {
    let floor = |floor_number: i32, count: i32| {
        (1..=count).map(move |bed_number| NewDormBed {
            floor_number,
            bed_number,
            bunk_type: BunkType::for_bed_number(bed_number),
            price: DORM_BED_PRICE,
        })
    };
    floor(2, 10).chain(floor(3, 12)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rooms_two_with_balcony() {
        let rooms = standard_rooms();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms.iter().filter(|r| r.has_balcony).count(), 2);
        assert_eq!(rooms[0].price, dec!(2000));
        assert_eq!(rooms[3].price, dec!(2500));
    }

    #[test]
    fn twenty_two_beds_across_two_floors() {
        let beds = standard_dorm_beds();
        assert_eq!(beds.len(), 22);
        assert_eq!(beds.iter().filter(|b| b.floor_number == 2).count(), 10);
        assert_eq!(beds.iter().filter(|b| b.floor_number == 3).count(), 12);
    }
}
