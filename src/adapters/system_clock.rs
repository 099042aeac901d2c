use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::ports::Clock;

/// Local wall clock backed by `chrono::Local` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
