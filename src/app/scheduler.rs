use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::{error, info};

use crate::app::cycle::{CycleReport, CycleRunner};
use crate::domain::TriggerPoint;
use crate::domain::schedule::due_trigger;
use crate::ports::Clock;

/// Longest pause between clock reads.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Extra pause after a fire so the trigger minute has passed.
pub const COOLDOWN: Duration = Duration::from_secs(60);

/// What a single tick did.
#[derive(Debug)]
pub enum TickOutcome {
    Idle,
    Fired { trigger: TriggerPoint, succeeded: bool },
}

/// Polls the clock and fires a cycle at each configured trigger point.
///
/// Each poll wakes at the start of the next wall-clock minute, so loop
/// overhead never skips a minute. Minutes missed while suspended or while a
/// long cycle runs are not caught up.
pub struct Scheduler<C: Clock, R: CycleRunner> {
    clock: C,
    runner: R,
    triggers: Vec<TriggerPoint>,
    last_fired: Option<(NaiveDate, TriggerPoint)>,
}

impl<C: Clock, R: CycleRunner> Scheduler<C, R> {
    pub fn new(clock: C, runner: R, triggers: Vec<TriggerPoint>) -> Self {
        Self { clock, runner, triggers, last_fired: None }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Check the clock once; fire and cool down if a trigger is due.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.clock.now();
        let Some(trigger) = due_trigger(&self.triggers, &now) else {
            return TickOutcome::Idle;
        };
        let key = (now.date(), trigger);
        if self.last_fired == Some(key) {
            return TickOutcome::Idle;
        }
        self.last_fired = Some(key);

        info!(trigger = %trigger, "Triggering scheduled code generation");
        let succeeded = match self.runner.run_cycle() {
            Ok(CycleReport { path, .. }) => {
                info!("Scheduled run published {}", path.display());
                true
            }
            Err(e) => {
                error!("Scheduled run failed: {e}");
                false
            }
        };

        self.clock.sleep(COOLDOWN);
        TickOutcome::Fired { trigger, succeeded }
    }

    /// One tick, then sleep until the next minute boundary.
    pub fn step(&mut self) -> TickOutcome {
        let outcome = self.tick();
        self.clock.sleep(until_next_minute(&self.clock.now()));
        outcome
    }

    pub fn run(&mut self) -> ! {
        let times: Vec<String> = self.triggers.iter().map(ToString::to_string).collect();
        info!("Scheduler started; triggers at {}", times.join(", "));
        loop {
            self.step();
        }
    }
}

fn until_next_minute(now: &NaiveDateTime) -> Duration {
    POLL_INTERVAL.saturating_sub(Duration::from_secs(u64::from(now.second())))
}
