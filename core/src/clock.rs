//! Time sources for the day/night cycle.
//!
//! The simulation never reads the system time directly; the engine asks its
//! Clock. Live shells use SystemClock, tests and batch runs use ManualClock.

use crate::types::Timestamp;
use chrono::Utc;

pub trait Clock: Send {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> Timestamp;

    /// Move the clock forward by `secs`. Wall clocks ignore this.
    fn advance(&mut self, secs: f64);
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = Utc::now();
        now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
    }

    fn advance(&mut self, _secs: f64) {}
}

/// A clock that only moves when advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    pub fn starting_at(now: Timestamp) -> Self {
        Self { now }
    }

    /// Start at the current wall-clock time, then move only when advanced.
    pub fn from_system() -> Self {
        Self::starting_at(SystemClock.now())
    }

    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}
