use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time for the trainer.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
    pub expired: bool,
}

/// Countdown for the running attempt, advanced by periodic ticks.
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    started_at: Option<Instant>,
    time_limit_secs: u64,
    elapsed_secs: u64,
    running: bool,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant, time_limit_secs: u64) {
        self.started_at = Some(now);
        self.time_limit_secs = time_limit_secs;
        self.elapsed_secs = 0;
        self.running = true;
    }

    /// Stop ticking; the countdown reads as fully spent.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_secs = self.time_limit_secs;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `None` once stopped, so a late tick can never fire twice.
    pub fn tick(&mut self, now: Instant) -> Option<ClockTick> {
        if !self.running {
            return None;
        }

        let started = self.started_at?;
        self.elapsed_secs = now.saturating_duration_since(started).as_millis() as u64 / 1000;

        Some(ClockTick {
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.remaining_secs(),
            expired: self.elapsed_secs >= self.time_limit_secs,
        })
    }

    pub fn time_limit_secs(&self) -> u64 {
        self.time_limit_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.time_limit_secs.saturating_sub(self.elapsed_secs)
    }
}
