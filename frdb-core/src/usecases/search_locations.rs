use super::prelude::*;

/// Case-insensitive substring search over name and address.
///
/// An empty query matches every record. Results are ordered by name,
/// ties keep the repository's creation order.
pub fn search_locations<R: LocationRepo>(repo: &R, txt: &str) -> Result<Vec<RescueLocation>> {
    let needle = txt.trim().to_lowercase();
    let mut locations = repo.all_locations()?;
    if !needle.is_empty() {
        locations.retain(|l| {
            l.name.to_lowercase().contains(&needle) || l.address.to_lowercase().contains(&needle)
        });
    }
    locations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(locations)
}
