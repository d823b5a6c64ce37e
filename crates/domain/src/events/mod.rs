//! Domain Events
//!
//! Coarse-grained events representing significant state changes in the domain.
//! `PetEvent` carries an immutable snapshot of the pet at the moment of a
//! lifecycle transition; the application layer maps it to integration events
//! at the messaging boundary.
//!
//! ## Aggregate Mutation Events
//!
//! The `pet_events` submodule contains return types from aggregate mutations,
//! communicating what happened when state was modified.

pub mod pet_events;

pub use pet_events::*;

use serde::Serialize;

use crate::ids::PetId;
use crate::value_objects::{PetBreed, PetColor, PetDateOfBirth, PetName, PetSpecies, SexOfPet};

/// Immutable snapshot of a pet's identifying and descriptive fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSnapshot {
    pub id: PetId,
    pub name: PetName,
    pub breed: PetBreed,
    pub sex: SexOfPet,
    pub color: PetColor,
    pub date_of_birth: PetDateOfBirth,
    pub species: PetSpecies,
}

/// Domain event raised by a pet lifecycle transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEvent {
    FlaggedForAdoption { pet: PetSnapshot },
    TransferredToHospital { pet: PetSnapshot },
}

impl PetEvent {
    /// Event type name of the adoption transition.
    pub const FLAGGED_FOR_ADOPTION: &'static str = "pet_flagged_for_adoption";

    /// Event type name of the hospital transition.
    pub const TRANSFERRED_TO_HOSPITAL: &'static str = "pet_transferred_to_hospital";

    /// Discriminator string for handler registration and logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FlaggedForAdoption { .. } => Self::FLAGGED_FOR_ADOPTION,
            Self::TransferredToHospital { .. } => Self::TRANSFERRED_TO_HOSPITAL,
        }
    }

    /// The snapshot carried by this event.
    pub fn pet(&self) -> &PetSnapshot {
        match self {
            Self::FlaggedForAdoption { pet } => pet,
            Self::TransferredToHospital { pet } => pet,
        }
    }
}
