//! Species registry
//!
//! A fixed set of species the clinic accepts, looked up by name. The set is
//! closed: an unknown name is a validation error, never a catch-all variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The species of a pet, from the fixed registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetSpecies {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    Reptile,
    Fish,
}

impl PetSpecies {
    /// All registered species, in display order.
    pub const ALL: [PetSpecies; 7] = [
        Self::Dog,
        Self::Cat,
        Self::Bird,
        Self::Rabbit,
        Self::Hamster,
        Self::Reptile,
        Self::Fish,
    ];

    /// Look up a species by name, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the name is not in the registry.
    pub fn lookup(name: &str) -> Result<Self, DomainError> {
        match name.trim().to_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "bird" => Ok(Self::Bird),
            "rabbit" => Ok(Self::Rabbit),
            "hamster" => Ok(Self::Hamster),
            "reptile" => Ok(Self::Reptile),
            "fish" => Ok(Self::Fish),
            other => Err(DomainError::validation(format!(
                "Unknown species: {}",
                other
            ))),
        }
    }

    /// Get a display-friendly name for this species
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Rabbit => "Rabbit",
            Self::Hamster => "Hamster",
            Self::Reptile => "Reptile",
            Self::Fish => "Fish",
        }
    }

    /// Get the string representation for storage and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Rabbit => "rabbit",
            Self::Hamster => "hamster",
            Self::Reptile => "reptile",
            Self::Fish => "fish",
        }
    }
}

impl fmt::Display for PetSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PetSpecies {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
