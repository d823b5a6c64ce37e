//! Static breed directory.

use async_trait::async_trait;
use pawmed_domain::PetBreed;

use crate::application::ports::outbound::{BreedLookupError, BreedLookupPort};

/// Canonical breed names accepted by default.
const DEFAULT_BREEDS: &[&str] = &[
    "Labrador",
    "Golden Retriever",
    "German Shepherd",
    "Poodle",
    "Beagle",
    "Bulldog",
    "Dachshund",
    "Siamese",
    "Persian",
    "Maine Coon",
    "Ragdoll",
    "Sphynx",
    "Mixed",
];

/// Breed lookup backed by a fixed table.
///
/// Matches case-insensitively and returns the canonical spelling.
pub struct StaticBreedDirectory {
    breeds: Vec<String>,
}

impl StaticBreedDirectory {
    pub fn new() -> Self {
        Self::with_breeds(DEFAULT_BREEDS.iter().map(|breed| breed.to_string()))
    }

    pub fn with_breeds(breeds: impl IntoIterator<Item = String>) -> Self {
        Self {
            breeds: breeds.into_iter().collect(),
        }
    }
}

impl Default for StaticBreedDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedLookupPort for StaticBreedDirectory {
    async fn resolve(&self, name: &str) -> Result<PetBreed, BreedLookupError> {
        let wanted = name.trim();
        let canonical = self
            .breeds
            .iter()
            .find(|breed| breed.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BreedLookupError::Unknown(name.to_string()))?;
        PetBreed::new(canonical.clone())
            .map_err(|err| BreedLookupError::Transport(err.to_string()))
    }
}
