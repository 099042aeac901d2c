use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::ports::Clock;

/// Simulated wall clock: `sleep` advances time instantly.
#[derive(Clone)]
pub struct FakeClock {
    now: Arc<Mutex<NaiveDateTime>>,
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn at(start: NaiveDateTime) -> Self {
        Self { now: Arc::new(Mutex::new(start)), slept: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        *self.now.lock().unwrap() = at;
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(duration).unwrap();
    }
}
