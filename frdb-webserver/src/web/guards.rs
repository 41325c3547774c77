use frdb_core::gateways::geocode::GeoCodingGateway;

/// Managed-state wrapper for the geocoding gateway.
pub struct GeoCoding(pub Box<dyn GeoCodingGateway + Send + Sync>);

/// Managed-state wrapper for the server version string.
pub struct Version(pub &'static str);
