//! Outbound ports - interfaces the application drives

mod breed_lookup_port;
mod message_bus_port;

pub use breed_lookup_port::{BreedLookupError, BreedLookupPort};
pub use message_bus_port::{MessageBusError, MessageBusPort};

#[cfg(test)]
pub use breed_lookup_port::MockBreedLookupPort;
#[cfg(test)]
pub use message_bus_port::MockMessageBusPort;
