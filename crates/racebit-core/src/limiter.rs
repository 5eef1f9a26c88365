//! Minimum-spacing rate limiter for bit samples.

use std::thread;
use std::time::{Duration, Instant};

/// Enforces a hard floor on the time between consecutive samples.
///
/// The floor exists to give the race workers enough uncontended time between
/// samples to actually flip the register; sampling faster than any flip
/// could occur would just re-read the previous winner.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_sample: Instant,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_sample: Instant::now(),
        }
    }

    /// Restart the spacing clock from now. Called on powerup.
    pub fn reset(&mut self) {
        self.last_sample = Instant::now();
    }

    /// Block until at least `min_interval` has passed since the previous
    /// sample, then mark now as the new sample time. Sleeps only for the
    /// shortfall; returns immediately when enough time has already elapsed.
    pub fn pace(&mut self) {
        let elapsed = self.last_sample.elapsed();
        if elapsed < self.min_interval {
            thread::sleep(self.min_interval - elapsed);
        }
        self.last_sample = Instant::now();
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
