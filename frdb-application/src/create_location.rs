use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    new_location: usecases::NewLocation,
) -> Result<RescueLocation> {
    let location = connections.exclusive()?.transaction(|conn| {
        usecases::create_location(conn, new_location).map_err(|err| {
            warn!("Failed to store new rescue location: {err}");
            err
        })
    })?;
    info!(
        "Created rescue location {} ({})",
        location.id, location.name
    );
    Ok(location)
}
