//! Dormitory beds

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LodgingError;
use crate::unit::UnitStatus;

/// Bunk position of a dorm bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BunkType {
    Lower,
    Upper,
}

impl BunkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BunkType::Lower => "LOWER",
            BunkType::Upper => "UPPER",
        }
    }

    /// Bunk assignment by bed-number parity: odd beds are lower bunks.
    pub fn for_bed_number(bed_number: i32) -> Self {
        if bed_number % 2 != 0 {
            BunkType::Lower
        } else {
            BunkType::Upper
        }
    }
}

impl fmt::Display for BunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BunkType {
    type Err = LodgingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOWER" => Ok(BunkType::Lower),
            "UPPER" => Ok(BunkType::Upper),
            other => Err(LodgingError::UnknownBunkType(other.to_string())),
        }
    }
}

/// A single dorm bed
///
/// Beds are bulk-regenerated at seed time (delete-all + recreate), so their
/// ids are not stable across reseeds; (floor_number, bed_number) is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DormBed {
    pub id: i64,
    pub floor_number: i32,
    pub bed_number: i32,
    pub bunk_type: BunkType,
    pub price: Decimal,
    pub status: UnitStatus,
}

impl DormBed {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Display label used on dashboards, e.g. "F2-B7".
    pub fn label(&self) -> String {
        format!("F{}-B{}", self.floor_number, self.bed_number)
    }
}

/// Bed fields under staff control at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDormBed {
    pub floor_number: i32,
    pub bed_number: i32,
    pub bunk_type: BunkType,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_beds_are_lower_bunks() {
        assert_eq!(BunkType::for_bed_number(1), BunkType::Lower);
        assert_eq!(BunkType::for_bed_number(2), BunkType::Upper);
        assert_eq!(BunkType::for_bed_number(11), BunkType::Lower);
    }
}
