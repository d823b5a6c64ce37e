//! Validated breed newtype
//!
//! `PetBreed` enforces shape only (non-empty, length-capped, trimmed).
//! Resolving a raw breed string to its canonical spelling is the job of the
//! breed-lookup collaborator in the application layer; the value object holds
//! whatever that lookup returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for the breed field
const MAX_BREED_LENGTH: usize = 200;

/// A validated breed name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetBreed(String);

impl PetBreed {
    /// Create a new validated breed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The breed is empty after trimming
    /// - The breed exceeds 200 characters after trimming
    pub fn new(breed: impl Into<String>) -> Result<Self, DomainError> {
        let breed = breed.into();
        let trimmed = breed.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Pet breed cannot be empty"));
        }
        if trimmed.len() > MAX_BREED_LENGTH {
            return Err(DomainError::validation(format!(
                "Pet breed cannot exceed {} characters",
                MAX_BREED_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the breed as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetBreed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PetBreed {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PetBreed> for String {
    fn from(breed: PetBreed) -> String {
        breed.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_round_trips_valid_input() {
        let breed = PetBreed::new("Labrador").unwrap();
        assert_eq!(breed.as_str(), "Labrador");
    }

    #[test]
    fn breed_trims_whitespace() {
        let breed = PetBreed::new(" Labrador ").unwrap();
        assert_eq!(breed.as_str(), "Labrador");
    }

    #[test]
    fn empty_breed_is_rejected() {
        assert!(PetBreed::new("").is_err());
    }

    #[test]
    fn overlong_breed_is_rejected() {
        assert!(PetBreed::new("x".repeat(201)).is_err());
    }
}
