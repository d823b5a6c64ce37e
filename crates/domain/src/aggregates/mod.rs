//! Aggregates - consistency boundaries with encapsulated state

mod pet;

pub use pet::Pet;
