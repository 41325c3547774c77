pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{geo::MapPoint, id::Id, location::RescueLocation, time::Timestamp};

    #[derive(Debug)]
    pub struct RescueLocationBuild {
        location: RescueLocation,
    }

    impl RescueLocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.location.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.location.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn details(mut self, details: &str) -> Self {
            self.location.details = Some(details.into());
            self
        }
        pub fn contact(mut self, contact: &str) -> Self {
            self.location.contact = Some(contact.into());
            self
        }
        pub fn finish(self) -> RescueLocation {
            self.location
        }
    }

    impl Builder for RescueLocation {
        type Build = RescueLocationBuild;
        fn build() -> Self::Build {
            Self::Build {
                location: RescueLocation {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    name: "".into(),
                    address: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    details: None,
                    contact: None,
                },
            }
        }
    }
}
