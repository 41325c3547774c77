use crate::config::{Config, GeocodingGateway};
use frdb_core::gateways::geocode::GeoCodingGateway;
use frdb_entities::{address::Address, geo::MapPoint};
use frdb_gateways::opencage::OpenCage;

pub fn geocoding_gateway(cfg: &Config) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match &cfg.geocoding.gateway {
        Some(GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(Some(api_key.clone())))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoGw)
        }
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _: &str) -> Option<MapPoint> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        None
    }

    fn resolve_lat_lng_address(&self, _: MapPoint) -> Option<Address> {
        log::debug!("Cannot resolve positions because no geocoding gateway was configured");
        None
    }
}
