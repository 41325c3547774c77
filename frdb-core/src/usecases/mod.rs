mod create_location;
mod delete_location;
mod draft;
mod error;
mod geocode;
mod search_locations;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_location::*, delete_location::*, draft::*, error::Error, geocode::*,
    search_locations::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway, repositories::*};
}
