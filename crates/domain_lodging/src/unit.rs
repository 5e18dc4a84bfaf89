//! Unit status and references shared by rooms and dorm beds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LodgingError;

/// Occupancy status of a bookable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    Available,
    Occupied,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Available => "AVAILABLE",
            UnitStatus::Occupied => "OCCUPIED",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, UnitStatus::Available)
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitStatus {
    type Err = LodgingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(UnitStatus::Available),
            "OCCUPIED" => Ok(UnitStatus::Occupied),
            other => Err(LodgingError::UnknownStatus(other.to_string())),
        }
    }
}

/// Reference to exactly one bookable unit
///
/// A guest occupies either a private room or a dorm bed, never both. This
/// enum makes the one-of invariant unrepresentable to violate in memory;
/// the storage layer mirrors it with a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitRef {
    Room(i64),
    DormBed(i64),
}

impl UnitRef {
    /// Builds a reference from the optional id pair used on the wire.
    ///
    /// A room id wins when both are supplied, matching the original
    /// check-in contract; returns None when neither is given.
    pub fn from_ids(room_id: Option<i64>, dorm_bed_id: Option<i64>) -> Option<Self> {
        match (room_id, dorm_bed_id) {
            (Some(id), _) => Some(UnitRef::Room(id)),
            (None, Some(id)) => Some(UnitRef::DormBed(id)),
            (None, None) => None,
        }
    }

    /// The (room_id, dorm_bed_id) column pair this reference stores as.
    pub fn column_pair(&self) -> (Option<i64>, Option<i64>) {
        match self {
            UnitRef::Room(id) => (Some(*id), None),
            UnitRef::DormBed(id) => (None, Some(*id)),
        }
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRef::Room(id) => write!(f, "room {}", id),
            UnitRef::DormBed(id) => write!(f, "dorm bed {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [UnitStatus::Available, UnitStatus::Occupied] {
            assert_eq!(status.as_str().parse::<UnitStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("CLEANING".parse::<UnitStatus>().is_err());
    }

    #[test]
    fn room_id_wins_when_both_supplied() {
        assert_eq!(UnitRef::from_ids(Some(3), Some(7)), Some(UnitRef::Room(3)));
        assert_eq!(UnitRef::from_ids(None, Some(7)), Some(UnitRef::DormBed(7)));
        assert_eq!(UnitRef::from_ids(None, None), None);
    }
}
