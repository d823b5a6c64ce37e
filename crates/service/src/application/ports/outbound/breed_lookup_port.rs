//! Breed Lookup Port - Interface for resolving breed names
//!
//! Every breed write - registration or later edit - resolves through this
//! port, so the canonical spelling always comes from the same source.

use async_trait::async_trait;
use pawmed_domain::PetBreed;
use thiserror::Error;

/// Port for resolving a raw breed name to its canonical breed
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedLookupPort: Send + Sync {
    /// Resolve `name` to a validated breed, or fail if it is not recognized.
    async fn resolve(&self, name: &str) -> Result<PetBreed, BreedLookupError>;
}

/// Errors that can occur while resolving a breed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BreedLookupError {
    /// The name does not match any known breed
    #[error("Unknown breed: {0}")]
    Unknown(String),

    /// Transport-level error reaching the lookup backend
    #[error("Breed lookup transport error: {0}")]
    Transport(String),
}
