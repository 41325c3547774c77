use std::{fmt::Display, result};

use frdb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json};
use frdb_application::prelude as flows;
use frdb_core::usecases;
use frdb_core::usecases::Error as ParameterError;

pub mod error;
mod geocoding;
mod locations;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   locations   --- //
        locations::get_locations,
        locations::get_location,
        locations::post_location,
        locations::delete_location,
        locations::get_search,
        locations::get_count_locations,
        // ---   geocoding   --- //
        geocoding::get_geocode_forward,
        geocoding::get_geocode_reverse,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
