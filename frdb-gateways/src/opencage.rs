use frdb_core::gateways::geocode::GeoCodingGateway;
use frdb_entities::{address::Address, geo::MapPoint};
use geocoding::{Forward, Opencage, Point};
use serde_json::Value;

/// Geocoding gateway backed by the OpenCage Data API.
///
/// Without an API key all lookups resolve to nothing.
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key found");
        }
        Self { api_key }
    }
}

fn address_from_components(components: &Value) -> Address {
    let get = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| components.get(k).and_then(Value::as_str))
            .map(ToOwned::to_owned)
    };
    Address {
        street: get(&["road", "street"]),
        house_number: get(&["house_number"]),
        city: get(&["city", "town", "village", "hamlet"]),
        state: get(&["state"]),
        zip: get(&["postcode"]),
        country: get(&["country"]),
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        let api_key = self.api_key.as_ref()?;
        if addr.trim().is_empty() {
            return None;
        }
        let oc = Opencage::new(api_key.clone());
        match oc.forward(addr) {
            Ok(res) => {
                // Geodetic points are (x = longitude, y = latitude).
                let point: Option<&Point<f64>> = res.first();
                if let Some(point) = point {
                    log::debug!("Resolved address '{}': {:?}", addr, point);
                    MapPoint::try_from_lat_lng_deg(point.y(), point.x())
                } else {
                    None
                }
            }
            Err(err) => {
                log::warn!("Failed to resolve address '{}': {}", addr, err);
                None
            }
        }
    }

    fn resolve_lat_lng_address(&self, pos: MapPoint) -> Option<Address> {
        let api_key = self.api_key.as_ref()?;
        let oc = Opencage::new(api_key.clone());
        let (lat, lng) = pos.to_lat_lng_deg();
        let point: Point<f64> = Point::new(lng, lat);
        match oc.reverse_full(&point) {
            Ok(res) => {
                let addr = res.results.first().map(|r| {
                    let components = Value::Object(r.components.clone().into_iter().collect());
                    address_from_components(&components)
                });
                log::debug!("Resolved position '{}': {:?}", pos, addr);
                addr
            }
            Err(err) => {
                log::warn!("Failed to resolve position '{}': {}", pos, err);
                None
            }
        }
    }
}
