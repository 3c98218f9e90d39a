//! Time sources for the game loop.

use std::thread;
use std::time::{Duration, Instant};

/// Millisecond clock plus the loop's only suspension point.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never goes backwards.
    fn now_millis(&self) -> u64;

    /// Suspend for `ms` milliseconds.
    fn sleep(&mut self, ms: u64);
}

/// Wall clock backed by a monotonic `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Simulated clock: `sleep` advances time instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self { now: start }
    }

    /// Jump forward without sleeping (e.g. a slow frame)
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now
    }

    fn sleep(&mut self, ms: u64) {
        self.now += ms;
    }
}
