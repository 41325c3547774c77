#[macro_use]
extern crate log;

mod create_location;
mod delete_location;

pub mod prelude {
    pub use super::{create_location::*, delete_location::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use frdb_core::{entities::*, usecases};

pub(crate) mod sqlite {
    pub use frdb_db_sqlite::Connections;
}

#[cfg(test)]
pub(crate) mod tests;
