pub use frdb_boundary::*;

use frdb_core::usecases;

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(l: NewRescueLocation) -> usecases::NewLocation {
        let NewRescueLocation {
            name,
            address,
            lat,
            lng,
            details,
            contact,
        } = l;
        usecases::NewLocation {
            name,
            address,
            lat,
            lng,
            details,
            contact,
        }
    }
}
