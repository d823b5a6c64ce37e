//! Repository error type shared by all storage ports.

use pawmed_domain::PetId;
use thiserror::Error;

/// Errors surfaced by repository ports
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No pet is stored under the given identifier
    #[error("Pet not found: {0}")]
    NotFound(PetId),

    /// A pet is already stored under the given identifier
    #[error("Pet already exists: {0}")]
    Duplicate(PetId),

    /// Transport- or storage-level failure
    #[error("Storage error: {0}")]
    Storage(String),
}
