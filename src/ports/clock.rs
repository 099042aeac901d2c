use std::time::Duration;

use chrono::NaiveDateTime;

/// Wall-clock source and sleeper used by the scheduler.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}
