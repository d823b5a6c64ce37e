//! Sex of a pet
//!
//! Closed set. Commands carry a numeric wire code; unknown codes are a
//! validation error rather than a fallback variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The sex of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SexOfPet {
    Male,
    Female,
}

impl SexOfPet {
    /// Construct from the numeric wire code (`1 = Male`, `2 = Female`).
    ///
    /// Zero is deliberately invalid so zero-initialized payloads fail
    /// validation instead of defaulting.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for any other code.
    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        match code {
            1 => Ok(Self::Male),
            2 => Ok(Self::Female),
            other => Err(DomainError::validation(format!(
                "Sex code out of range: {}",
                other
            ))),
        }
    }

    /// The numeric wire code for this sex.
    pub fn code(&self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Get the string representation for storage and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for SexOfPet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SexOfPet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(DomainError::parse(format!("Unknown sex: {}", other))),
        }
    }
}
