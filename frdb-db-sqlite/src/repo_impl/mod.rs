use anyhow::anyhow;
use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use frdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod location;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
