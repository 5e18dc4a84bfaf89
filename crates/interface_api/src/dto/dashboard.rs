//! Dashboard DTOs

use serde::Serialize;

use infra_db::{BedWithGuest, RoomWithGuest};

/// Every unit with its current occupant
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub rooms: Vec<RoomWithGuest>,
    pub dorm_beds: Vec<BedWithGuest>,
}
