//! Testability ports for injecting time.

use chrono::{DateTime, Utc};

/// Clock port so command handlers never read ambient time directly.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
