//! Message Bus Port - Interface for publishing integration events
//!
//! This port abstracts the pub/sub transport, allowing the application to
//! publish integration events without knowing the underlying broker.

use async_trait::async_trait;
use thiserror::Error;

/// Port for publishing integration events to a pub/sub channel
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageBusPort: Send + Sync {
    /// Publish a payload to a topic on a channel.
    ///
    /// Fire-and-forget from the service's perspective: the call is awaited
    /// for completion but delivery is not tracked afterwards.
    async fn publish(
        &self,
        channel: &str,
        topic: &str,
        payload: serde_json::Value,
    ) -> Result<(), MessageBusError>;
}

/// Errors that can occur when publishing integration events
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageBusError {
    /// Transport-level error (e.g., broker unreachable)
    #[error("Message bus transport error: {0}")]
    Transport(String),
}
