// Low-level database access traits.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: &RescueLocation) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<RescueLocation>;

    // All locations in creation order, i.e. the map marker listing.
    fn all_locations(&self) -> Result<Vec<RescueLocation>>;
    fn count_locations(&self) -> Result<usize>;

    // Records are never updated in place, only created and deleted.
    fn delete_location(&self, id: &str) -> Result<()>;
}
