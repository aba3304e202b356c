//! Wall-clock source for token expiry checks.

use chrono::{DateTime, Utc};

/// Source of "now". Injected into the client so token expiry can be driven
/// from tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
