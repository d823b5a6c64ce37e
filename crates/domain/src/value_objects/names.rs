//! Validated string newtypes for pet fields
//!
//! These newtypes ensure that values are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for the pet name field
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for the color field
const MAX_COLOR_LENGTH: usize = 100;

// ============================================================================
// PetName
// ============================================================================

/// A validated pet name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetName(String);

impl PetName {
    /// Create a new validated pet name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Pet name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Pet name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PetName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PetName> for String {
    fn from(name: PetName) -> String {
        name.0
    }
}

// ============================================================================
// PetColor
// ============================================================================

/// A validated coat color (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetColor(String);

impl PetColor {
    /// Create a new validated color.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The color is empty after trimming
    /// - The color exceeds 100 characters after trimming
    pub fn new(color: impl Into<String>) -> Result<Self, DomainError> {
        let color = color.into();
        let trimmed = color.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Pet color cannot be empty"));
        }
        if trimmed.len() > MAX_COLOR_LENGTH {
            return Err(DomainError::validation(format!(
                "Pet color cannot exceed {} characters",
                MAX_COLOR_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PetColor {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PetColor> for String {
    fn from(color: PetColor) -> String {
        color.0
    }
}
