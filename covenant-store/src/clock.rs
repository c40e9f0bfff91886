//! Hour-of-day sources for prayer selection.

use chrono::{Local, Timelike};
use std::sync::atomic::{AtomicU32, Ordering};

/// Source of the current hour of the day (0 - 23).
pub trait HourClock: Send + Sync {
    /// Current hour of the day
    fn hour(&self) -> u32;
}

/// Wall-clock hour in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl HourClock for LocalClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Settable clock for tests and replays.
#[derive(Debug, Default)]
pub struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    /// Create a clock stuck at `hour` (taken modulo 24).
    pub fn new(hour: u32) -> Self {
        Self {
            hour: AtomicU32::new(hour % 24),
        }
    }

    /// Move the clock to another hour.
    pub fn set_hour(&self, hour: u32) {
        self.hour.store(hour % 24, Ordering::SeqCst);
    }
}

impl HourClock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour.load(Ordering::SeqCst)
    }
}
