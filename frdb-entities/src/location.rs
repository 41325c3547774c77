use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// A saved food-rescue location.
///
/// Records are immutable after creation: there is no edit flow,
/// only create and delete.
#[derive(Debug, Clone, PartialEq)]
pub struct RescueLocation {
    pub id: Id,
    pub created_at: Timestamp,
    pub name: String,
    pub address: String,
    pub pos: MapPoint,
    pub details: Option<String>,
    pub contact: Option<String>,
}
