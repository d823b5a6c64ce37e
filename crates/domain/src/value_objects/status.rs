//! Pet lifecycle status
//!
//! A state enum rather than a pair of booleans, so every pet is in exactly
//! one lifecycle state at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PetStatus {
    /// In the clinic's care, available for all operations
    #[default]
    Active,
    /// Flagged as available for adoption
    FlaggedForAdoption,
    /// Transferred to the hospital service
    InHospital,
}

impl PetStatus {
    /// Returns true if the pet has not been through either transition.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true if the pet is flagged for adoption.
    #[inline]
    pub fn is_flagged_for_adoption(&self) -> bool {
        matches!(self, Self::FlaggedForAdoption)
    }

    /// Returns true if the pet has been transferred to the hospital.
    #[inline]
    pub fn is_in_hospital(&self) -> bool {
        matches!(self, Self::InHospital)
    }

    /// Get the string representation for storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::FlaggedForAdoption => "flagged_for_adoption",
            Self::InHospital => "in_hospital",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
