use super::prelude::*;

use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, crate::RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<RescueLocation>>,
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &RescueLocation) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        if locations.iter().any(|l| l.id == location.id) {
            return Err(crate::RepoError::AlreadyExists);
        }
        locations.push(location.clone());
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<RescueLocation> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(crate::RepoError::NotFound)
    }

    fn all_locations(&self) -> RepoResult<Vec<RescueLocation>> {
        let mut locations = self.locations.borrow().clone();
        locations.sort_by_key(|l| l.created_at);
        Ok(locations)
    }

    fn count_locations(&self) -> RepoResult<usize> {
        Ok(self.locations.borrow().len())
    }

    fn delete_location(&self, id: &str) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let len = locations.len();
        locations.retain(|l| l.id.as_str() != id);
        if locations.len() == len {
            return Err(crate::RepoError::NotFound);
        }
        Ok(())
    }
}
