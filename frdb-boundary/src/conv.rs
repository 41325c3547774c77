use super::*;
use frdb_entities as e;

impl From<e::location::RescueLocation> for RescueLocation {
    fn from(from: e::location::RescueLocation) -> Self {
        let e::location::RescueLocation {
            id,
            created_at,
            name,
            address,
            pos,
            details,
            contact,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            created: created_at.into_millis(),
            name,
            address,
            lat,
            lng,
            details,
            contact,
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::address::Address> for ResolvedAddress {
    fn from(from: e::address::Address) -> Self {
        let formatted = from.to_address_line();
        let e::address::Address {
            street,
            house_number,
            city,
            state,
            zip,
            country,
        } = from;
        Self {
            formatted,
            street,
            house_number,
            city,
            state,
            zip,
            country,
        }
    }
}
