use super::prelude::*;

pub fn delete_location<R: LocationRepo>(repo: &R, id: &str) -> Result<()> {
    log::debug!("Deleting rescue location: id = {id}");
    repo.delete_location(id)?;
    Ok(())
}
