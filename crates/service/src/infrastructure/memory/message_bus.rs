//! Recording in-memory message bus.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::outbound::{MessageBusError, MessageBusPort};

/// A message captured by [`InMemoryMessageBus`]
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub channel: String,
    pub topic: String,
    pub payload: serde_json::Value,
}

/// Message bus that records every publish for later assertion.
#[derive(Default)]
pub struct InMemoryMessageBus {
    published: Mutex<Vec<PublishedMessage>>,
}

impl InMemoryMessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages published so far, in publish order.
    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl MessageBusPort for InMemoryMessageBus {
    async fn publish(
        &self,
        channel: &str,
        topic: &str,
        payload: serde_json::Value,
    ) -> Result<(), MessageBusError> {
        self.published.lock().await.push(PublishedMessage {
            channel: channel.to_string(),
            topic: topic.to_string(),
            payload,
        });
        Ok(())
    }
}
