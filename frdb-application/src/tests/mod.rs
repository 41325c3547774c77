pub mod prelude {

    pub fn default_new_location() -> usecases::NewLocation {
        usecases::NewLocation {
            name: "Food Bank Lublin".into(),
            address: "Krakowskie Przedmieście 12, Lublin".into(),
            lat: 51.2465,
            lng: 22.5684,
            details: None,
            contact: None,
        }
    }

    pub use frdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn fixture() -> sqlite::Connections {
        let connections = sqlite::Connections::init(":memory:", 1).unwrap();
        frdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
        connections
    }
}

use self::prelude::*;

#[test]
fn create_location_is_persisted() {
    let connections = fixture();
    let created = flows::create_location(&connections, default_new_location()).unwrap();

    let db = connections.shared().unwrap();
    let stored = db.get_location(created.id.as_str()).unwrap();
    assert_eq!(created, stored);
    assert_eq!(1, db.count_locations().unwrap());
}

#[test]
fn create_invalid_location_stores_nothing() {
    let connections = fixture();
    let new_location = usecases::NewLocation {
        name: "".into(),
        ..default_new_location()
    };
    assert!(flows::create_location(&connections, new_location).is_err());
    assert_eq!(0, connections.shared().unwrap().count_locations().unwrap());
}

#[test]
fn delete_location_is_permanent() {
    let connections = fixture();
    let created = flows::create_location(&connections, default_new_location()).unwrap();
    flows::delete_location(&connections, created.id.as_str()).unwrap();

    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_locations().unwrap());
    assert!(matches!(
        db.get_location(created.id.as_str()),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn delete_unknown_location_fails() {
    let connections = fixture();
    assert!(flows::delete_location(&connections, "no-such-id").is_err());
}
