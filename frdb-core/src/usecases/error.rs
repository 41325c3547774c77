use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    Name,
    #[error("The address must not be empty")]
    Address,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The address could not be resolved to a position")]
    AddressNotFound,
    #[error("No address could be found for the position")]
    AddressLookupFailed,
    #[error("The draft is not ready to be saved")]
    DraftIncomplete,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
