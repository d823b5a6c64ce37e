//! Date of birth
//!
//! The domain never reads the clock itself; callers pass `today` in
//! (time comes from the clock port at the application boundary).

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

/// Oldest plausible age for any accepted species, in years
const MAX_PET_AGE_YEARS: u32 = 100;

/// A validated date of birth (not in the future, within a plausible age window)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PetDateOfBirth(NaiveDate);

impl PetDateOfBirth {
    /// Create a new validated date of birth.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The date is after `today`
    /// - The date is more than 100 years before `today`
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        if date > today {
            return Err(DomainError::validation(
                "Date of birth cannot be in the future",
            ));
        }
        if today.years_since(date).unwrap_or(0) > MAX_PET_AGE_YEARS {
            return Err(DomainError::validation(format!(
                "Date of birth implies an age over {} years",
                MAX_PET_AGE_YEARS
            )));
        }
        Ok(Self(date))
    }

    /// Returns the wrapped date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PetDateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PetDateOfBirth> for NaiveDate {
    fn from(dob: PetDateOfBirth) -> Self {
        dob.0
    }
}
