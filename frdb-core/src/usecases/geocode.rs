use super::prelude::*;

/// Resolve a postal address to a map position (forward geocoding).
pub fn resolve_address_position(gw: &dyn GeoCodingGateway, addr: &str) -> Result<MapPoint> {
    gw.resolve_address_lat_lng(addr)
        .ok_or(Error::AddressNotFound)
}

/// Resolve a map position to its address components (reverse geocoding).
///
/// A placemark without any resolvable component counts as a failed lookup.
pub fn resolve_position_address(gw: &dyn GeoCodingGateway, pos: MapPoint) -> Result<Address> {
    match gw.resolve_lat_lng_address(pos) {
        Some(addr) if !addr.is_empty() => Ok(addr),
        _ => Err(Error::AddressLookupFailed),
    }
}
