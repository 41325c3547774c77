pub mod entities {
    pub use frdb_entities::{address::*, geo::*, id::*, location::*, time::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;

pub use repositories::Error as RepoError;
