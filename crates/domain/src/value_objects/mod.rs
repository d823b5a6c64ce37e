//! Value objects - Immutable objects defined by their attributes

mod breed;
mod date_of_birth;
mod names;
mod sex;
mod species;
mod status;

pub use breed::PetBreed;
pub use date_of_birth::PetDateOfBirth;
pub use names::{PetColor, PetName};
pub use sex::SexOfPet;
pub use species::PetSpecies;
pub use status::PetStatus;
