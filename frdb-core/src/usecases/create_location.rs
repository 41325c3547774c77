use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub details: Option<String>,
    pub contact: Option<String>,
}

pub fn create_location<R: LocationRepo>(repo: &R, l: NewLocation) -> Result<RescueLocation> {
    let NewLocation {
        name,
        address,
        lat,
        lng,
        details,
        contact,
    } = l;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if address.trim().is_empty() {
        return Err(Error::Address);
    }
    let location = RescueLocation {
        id: Id::new(),
        created_at: Timestamp::now(),
        name,
        address,
        pos,
        details: details.filter(|d| !d.is_empty()),
        contact: contact.filter(|c| !c.is_empty()),
    };
    log::debug!("Creating new rescue location: id = {}", location.id);
    repo.create_location(&location)?;
    Ok(location)
}
