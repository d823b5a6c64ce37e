//! In-memory pet repository.

use async_trait::async_trait;
use dashmap::DashMap;
use pawmed_domain::{Pet, PetId};

use crate::infrastructure::ports::{PetRepo, RepoError};

/// Concurrent in-memory pet store.
///
/// Last write wins on `update`; there is no versioning or locking, matching
/// the repository contract.
#[derive(Default)]
pub struct InMemoryPetRepo {
    pets: DashMap<PetId, Pet>,
}

impl InMemoryPetRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepo for InMemoryPetRepo {
    async fn add(&self, pet: &Pet) -> Result<(), RepoError> {
        if self.pets.contains_key(&pet.id()) {
            return Err(RepoError::Duplicate(pet.id()));
        }
        self.pets.insert(pet.id(), pet.clone());
        Ok(())
    }

    async fn get(&self, id: PetId) -> Result<Pet, RepoError> {
        self.pets
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::NotFound(id))
    }

    async fn update(&self, pet: &Pet) -> Result<(), RepoError> {
        if !self.pets.contains_key(&pet.id()) {
            return Err(RepoError::NotFound(pet.id()));
        }
        self.pets.insert(pet.id(), pet.clone());
        Ok(())
    }
}
