use super::*;

use frdb_core::repositories::LocationRepo;

#[get("/locations")]
pub fn get_locations(db: sqlite::Connections) -> Result<Vec<json::RescueLocation>> {
    let locations = {
        let db = db.shared()?;
        db.all_locations()?
    };
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[get("/locations/<id>")]
pub fn get_location(db: sqlite::Connections, id: String) -> Result<json::RescueLocation> {
    let location = {
        let db = db.shared()?;
        db.get_location(&id)?
    };
    Ok(Json(location.into()))
}

#[post("/locations", data = "<new_location>")]
pub fn post_location(
    db: sqlite::Connections,
    new_location: JsonResult<json::NewRescueLocation>,
) -> Result<String> {
    let new_location = from_json::new_location(
        new_location
            .map_err(|err| {
                log::debug!("Invalid location: {:?}", err);
                err
            })?
            .into_inner(),
    );
    let location = flows::create_location(&db, new_location)?;
    Ok(Json(location.id.to_string()))
}

#[delete("/locations/<id>")]
pub fn delete_location(db: sqlite::Connections, id: String) -> StatusResult {
    flows::delete_location(&db, &id)?;
    Ok(Status::NoContent)
}

#[get("/search?<text>")]
pub fn get_search(
    db: sqlite::Connections,
    text: Option<String>,
) -> Result<Vec<json::RescueLocation>> {
    let text = text.unwrap_or_default();
    let locations = {
        let db = db.shared()?;
        usecases::search_locations(&db, &text)?
    };
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[get("/count/locations")]
pub fn get_count_locations(db: sqlite::Connections) -> Result<json::ResultCount> {
    let db = db.shared()?;
    let count = db.count_locations()? as u64;
    Ok(Json(json::ResultCount { count }))
}
