//! PawMed Service - application layer for the pet-management service
//!
//! Receives commands, drives the [`pawmed_domain::Pet`] aggregate through the
//! repository port, and republishes lifecycle domain events as integration
//! events on the message-bus port. Storage, broker, and breed-lookup backends
//! live behind ports; in-memory adapters are provided for tests and local
//! composition.

pub mod application;
pub mod infrastructure;

pub use application::services::{PetApplicationService, PetServiceError};
