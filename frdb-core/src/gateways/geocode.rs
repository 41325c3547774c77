use crate::entities::{Address, MapPoint};

/// Bridge to an external geocoding service.
///
/// Both directions are single-shot without retries. Implementations log
/// service errors and collapse them into an empty result.
pub trait GeoCodingGateway {
    /// Forward geocoding: the position of the first candidate.
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint>;

    /// Reverse geocoding: the address components of the first candidate.
    fn resolve_lat_lng_address(&self, pos: MapPoint) -> Option<Address>;
}
