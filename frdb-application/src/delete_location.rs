use super::*;

pub fn delete_location(connections: &sqlite::Connections, id: &str) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_location(conn, id).map_err(|err| {
            warn!("Failed to delete rescue location {id}: {err}");
            err
        })
    })?;
    info!("Deleted rescue location {id}");
    Ok(())
}
