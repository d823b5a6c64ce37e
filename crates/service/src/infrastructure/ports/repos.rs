//! Repository port traits for pet storage.

use async_trait::async_trait;
use pawmed_domain::{Pet, PetId};

use super::error::RepoError;

/// Storage port for the pet aggregate.
///
/// `get` returns the pet or `RepoError::NotFound`; callers treat a missing
/// pet as a failure, never as an empty result. Concurrent load-mutate-save
/// sequences against the same id are last-write-wins; the port offers no
/// transactional guarantee.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepo: Send + Sync {
    /// Store a new pet. Fails with `RepoError::Duplicate` if the id is taken.
    async fn add(&self, pet: &Pet) -> Result<(), RepoError>;

    /// Load the pet stored under `id`.
    async fn get(&self, id: PetId) -> Result<Pet, RepoError>;

    /// Replace the stored state of an existing pet.
    async fn update(&self, pet: &Pet) -> Result<(), RepoError>;
}
