//! Messaging settings
//!
//! The pub/sub channel name is fixed per deployment and read from the
//! environment at composition time.

use serde::{Deserialize, Serialize};

/// Default pub/sub channel integration events are published on
const DEFAULT_CHANNEL: &str = "pubsub";

/// Environment variable overriding the pub/sub channel
const CHANNEL_ENV_VAR: &str = "PAWMED_PUBSUB_CHANNEL";

/// Settings for integration-event publication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessagingSettings {
    /// Pub/sub channel integration events are published on
    pub channel: String,
}

impl Default for MessagingSettings {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl MessagingSettings {
    /// Load settings from the environment, falling back to defaults.
    ///
    /// Reads a `.env` file when present, then applies `PAWMED_PUBSUB_CHANNEL`
    /// if set and non-empty.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut settings = Self::default();
        if let Ok(channel) = std::env::var(CHANNEL_ENV_VAR) {
            let trimmed = channel.trim();
            if trimmed.is_empty() {
                tracing::warn!(
                    "Ignoring empty {} environment variable",
                    CHANNEL_ENV_VAR
                );
            } else {
                tracing::info!(channel = trimmed, "Applied {} environment variable", CHANNEL_ENV_VAR);
                settings.channel = trimmed.to_string();
            }
        }
        settings
    }
}
