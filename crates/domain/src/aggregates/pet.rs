//! Pet aggregate - the unit of load/mutate/save
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all fields are encapsulated
//! - **Newtypes**: every descriptive field is a validated value object
//! - **State enum**: `PetStatus` replaces implicit lifecycle booleans
//! - **Domain events**: lifecycle mutations return outcome enums carrying
//!   the event to publish; the aggregate never talks to messaging itself
//! - **Valid by construction**: `new()` takes pre-validated types
//!
//! Field setters take already-validated value objects, so an invalid raw
//! input fails at value-object construction and leaves the pet unmodified.

use crate::events::{AdoptionFlagOutcome, HospitalTransferOutcome, PetEvent, PetSnapshot, PetUpdate};
use crate::ids::PetId;
use crate::value_objects::{
    PetBreed, PetColor, PetDateOfBirth, PetName, PetSpecies, PetStatus, SexOfPet,
};

/// A pet under the clinic's management
///
/// # Invariants
///
/// - `id` is assigned at construction and never changes
/// - every descriptive field holds a validated value object
/// - `status` is always exactly one of `Active`, `FlaggedForAdoption`,
///   or `InHospital`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pawmed_domain::aggregates::Pet;
/// use pawmed_domain::ids::PetId;
/// use pawmed_domain::value_objects::{
///     PetBreed, PetColor, PetDateOfBirth, PetName, PetSpecies, SexOfPet,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// let pet = Pet::new(
///     PetId::new(),
///     PetName::new("Fido").unwrap(),
///     PetBreed::new("Labrador").unwrap(),
///     SexOfPet::Male,
///     PetColor::new("Brown").unwrap(),
///     PetDateOfBirth::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), today).unwrap(),
///     PetSpecies::Dog,
/// );
///
/// assert_eq!(pet.name().as_str(), "Fido");
/// assert!(pet.status().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    // Identity
    id: PetId,

    // Descriptive fields (newtypes)
    name: PetName,
    breed: PetBreed,
    sex: SexOfPet,
    color: PetColor,
    date_of_birth: PetDateOfBirth,
    species: PetSpecies,

    // Lifecycle state (enum, not booleans)
    status: PetStatus,
}

impl Pet {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new active pet.
    ///
    /// Every parameter must be a pre-validated value object - validation
    /// happens when creating the value objects, not here.
    pub fn new(
        id: PetId,
        name: PetName,
        breed: PetBreed,
        sex: SexOfPet,
        color: PetColor,
        date_of_birth: PetDateOfBirth,
        species: PetSpecies,
    ) -> Self {
        Self {
            id,
            name,
            breed,
            sex,
            color,
            date_of_birth,
            species,
            status: PetStatus::Active,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the pet's unique identifier.
    #[inline]
    pub fn id(&self) -> PetId {
        self.id
    }

    /// Returns the pet's name.
    #[inline]
    pub fn name(&self) -> &PetName {
        &self.name
    }

    /// Returns the pet's breed.
    #[inline]
    pub fn breed(&self) -> &PetBreed {
        &self.breed
    }

    /// Returns the pet's sex.
    #[inline]
    pub fn sex(&self) -> SexOfPet {
        self.sex
    }

    /// Returns the pet's coat color.
    #[inline]
    pub fn color(&self) -> &PetColor {
        &self.color
    }

    /// Returns the pet's date of birth.
    #[inline]
    pub fn date_of_birth(&self) -> PetDateOfBirth {
        self.date_of_birth
    }

    /// Returns the pet's species.
    #[inline]
    pub fn species(&self) -> PetSpecies {
        self.species
    }

    /// Returns the pet's lifecycle status.
    #[inline]
    pub fn status(&self) -> PetStatus {
        self.status
    }

    // =========================================================================
    // Builder Methods (for storage rehydration)
    // =========================================================================

    /// Set the pet's status (used when loading from storage).
    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Replace the pet's name.
    pub fn set_name(&mut self, name: PetName) -> PetUpdate {
        let from = std::mem::replace(&mut self.name, name);
        PetUpdate::NameChanged {
            from,
            to: self.name.clone(),
        }
    }

    /// Replace the pet's breed.
    pub fn set_breed(&mut self, breed: PetBreed) -> PetUpdate {
        let from = std::mem::replace(&mut self.breed, breed);
        PetUpdate::BreedChanged {
            from,
            to: self.breed.clone(),
        }
    }

    /// Replace the pet's coat color.
    pub fn set_color(&mut self, color: PetColor) -> PetUpdate {
        let from = std::mem::replace(&mut self.color, color);
        PetUpdate::ColorChanged {
            from,
            to: self.color.clone(),
        }
    }

    /// Replace the pet's date of birth.
    pub fn set_date_of_birth(&mut self, date_of_birth: PetDateOfBirth) -> PetUpdate {
        let from = std::mem::replace(&mut self.date_of_birth, date_of_birth);
        PetUpdate::DateOfBirthChanged {
            from,
            to: self.date_of_birth,
        }
    }

    /// Flag the pet as available for adoption.
    ///
    /// Returns an `AdoptionFlagOutcome`:
    /// - `Flagged` with the domain event to publish, carrying a snapshot of
    ///   the pet's fields at the moment of the transition
    /// - `AlreadyFlagged` when the pet is already flagged; nothing changes
    ///   and no event is raised
    pub fn flag_for_adoption(&mut self) -> AdoptionFlagOutcome {
        if self.status.is_flagged_for_adoption() {
            return AdoptionFlagOutcome::AlreadyFlagged;
        }

        self.status = PetStatus::FlaggedForAdoption;
        AdoptionFlagOutcome::Flagged(PetEvent::FlaggedForAdoption {
            pet: self.snapshot(),
        })
    }

    /// Transfer the pet to the hospital service.
    ///
    /// Returns a `HospitalTransferOutcome`:
    /// - `Transferred` with the domain event to publish
    /// - `AlreadyInHospital` when the pet is already there; nothing changes
    ///   and no event is raised
    pub fn transfer_to_hospital(&mut self) -> HospitalTransferOutcome {
        if self.status.is_in_hospital() {
            return HospitalTransferOutcome::AlreadyInHospital;
        }

        self.status = PetStatus::InHospital;
        HospitalTransferOutcome::Transferred(PetEvent::TransferredToHospital {
            pet: self.snapshot(),
        })
    }

    /// Snapshot the pet's identifying and descriptive fields.
    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            id: self.id,
            name: self.name.clone(),
            breed: self.breed.clone(),
            sex: self.sex,
            color: self.color.clone(),
            date_of_birth: self.date_of_birth,
            species: self.species,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
