//! Ports for storage and testability concerns.

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::PetRepo;
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockPetRepo;
#[cfg(test)]
pub use testing::MockClockPort;
