use std::{fmt::Debug, time::Duration};

use crate::physics::orbits::solar_system::DEFAULT_TICK_INTERVAL;

/// A clock for the orbit simulation.
/// Counts fixed ticks, so simulated time is independent of the frame rate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    tick: u64,
    interval: Duration,
}

impl Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("tick", &self.tick)
            .field("interval", &self.interval)
            .finish()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self { tick: 0, interval }
    }
    pub fn get_current_tick(&self) -> u64 {
        self.tick
    }
    pub fn get_interval(&self) -> Duration {
        self.interval
    }
    /// Simulated time, `ticks * interval`
    pub fn get_current_time(&self) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(self.tick).unwrap_or(u32::MAX))
    }
    pub fn update(&mut self) {
        self.tick += 1;
    }
}
