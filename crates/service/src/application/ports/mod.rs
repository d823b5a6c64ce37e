//! Application-layer ports

pub mod outbound;
