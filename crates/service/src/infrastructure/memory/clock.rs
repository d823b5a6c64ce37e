//! Wall-clock adapter.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::ClockPort;

/// Real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
