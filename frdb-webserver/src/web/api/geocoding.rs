use super::*;
use frdb_core::entities::MapPoint;

#[get("/geocode/forward?<addr>")]
pub fn get_geocode_forward(geo_gw: &State<GeoCoding>, addr: String) -> Result<json::Coordinate> {
    let pos = usecases::resolve_address_position(&*geo_gw.0, &addr)?;
    Ok(Json(pos.into()))
}

#[get("/geocode/reverse?<lat>&<lng>")]
pub fn get_geocode_reverse(
    geo_gw: &State<GeoCoding>,
    lat: f64,
    lng: f64,
) -> Result<json::ResolvedAddress> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ParameterError::InvalidPosition)?;
    let addr = usecases::resolve_position_address(&*geo_gw.0, pos)?;
    Ok(Json(addr.into()))
}
