//! Wall clock abstraction.

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
///
/// The cooldown logic never calls `Utc::now()` directly so tests can drive
/// time forward deterministically.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
