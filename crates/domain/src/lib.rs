//! PawMed Domain - Pet aggregate, value objects, and invariants
//!
//! This crate holds the pet-management domain model and nothing else: no
//! async runtime, no storage, no messaging. Collaborator interfaces live in
//! `pawmed-service`; this crate stays dependency-light so the domain rules
//! can be exercised without infrastructure.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::Pet;
pub use error::DomainError;
pub use events::{
    AdoptionFlagOutcome, HospitalTransferOutcome, PetEvent, PetSnapshot, PetUpdate,
};
pub use ids::PetId;
pub use value_objects::{
    PetBreed, PetColor, PetDateOfBirth, PetName, PetSpecies, PetStatus, SexOfPet,
};
