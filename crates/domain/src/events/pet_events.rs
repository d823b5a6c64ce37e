//! Pet-related domain events
//!
//! These enums communicate what happened when pet state was modified,
//! allowing callers to react appropriately.

use crate::events::PetEvent;
use crate::value_objects::{PetBreed, PetColor, PetDateOfBirth, PetName};

/// Outcome of updating a single descriptive field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetUpdate {
    NameChanged { from: PetName, to: PetName },
    BreedChanged { from: PetBreed, to: PetBreed },
    ColorChanged { from: PetColor, to: PetColor },
    DateOfBirthChanged {
        from: PetDateOfBirth,
        to: PetDateOfBirth,
    },
}

/// Outcome of flagging a pet for adoption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdoptionFlagOutcome {
    /// The pet was flagged; the event carries the snapshot to publish
    Flagged(PetEvent),
    /// The pet was already flagged, nothing changed
    AlreadyFlagged,
}

/// Outcome of transferring a pet to the hospital
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HospitalTransferOutcome {
    /// The pet was transferred; the event carries the snapshot to publish
    Transferred(PetEvent),
    /// The pet was already in the hospital, nothing changed
    AlreadyInHospital,
}
