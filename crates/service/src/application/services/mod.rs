//! Application services - command orchestration

mod pet_service;

pub use pet_service::{PetApplicationService, PetServiceError};
