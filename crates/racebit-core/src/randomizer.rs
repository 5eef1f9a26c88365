//! The race-based randomizer engine: lifecycle, rate-limited bit sampling,
//! and bounded-integer rejection sampling.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::{RandomizerError, Result};
use crate::limiter::RateLimiter;
use crate::register::BitRegister;
use crate::sampler::{bits_needed, compose_bits};
use crate::worker::RaceWorkerPair;

/// Smallest accepted sampling interval in milliseconds.
pub const MIN_INTERVAL_MILLIS: u64 = 20;

/// Lifecycle state gating all sampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomizerState {
    Stopped,
    Running,
}

/// Pseudorandom bit and bounded-integer generator backed by a worker race.
///
/// Each instance exclusively owns its shared register, cancellation signal,
/// and interval configuration; independent engines never interfere. The
/// register and cancellation signal are replaced wholesale on every
/// [`powerup`](Self::powerup) so a worker left over from a previous cycle
/// can never write into the current one.
pub struct Randomizer {
    state: RandomizerState,
    limiter: RateLimiter,
    register: Arc<BitRegister>,
    cancel: Option<Arc<AtomicBool>>,
    workers: Option<RaceWorkerPair>,
}

impl Randomizer {
    /// Create a stopped engine sampling at most once per `interval_millis`.
    ///
    /// Fails with [`RandomizerError::InvalidInterval`] below the
    /// [`MIN_INTERVAL_MILLIS`] floor.
    pub fn new(interval_millis: u64) -> Result<Self> {
        if interval_millis < MIN_INTERVAL_MILLIS {
            return Err(RandomizerError::InvalidInterval {
                millis: interval_millis,
            });
        }
        Ok(Self {
            state: RandomizerState::Stopped,
            limiter: RateLimiter::new(Duration::from_millis(interval_millis)),
            register: Arc::new(BitRegister::new()),
            cancel: None,
            workers: None,
        })
    }

    /// Start the worker race. Fails with [`RandomizerError::AlreadyRunning`]
    /// if already powered up.
    pub fn powerup(&mut self) -> Result<()> {
        if self.state == RandomizerState::Running {
            return Err(RandomizerError::AlreadyRunning);
        }

        // Fresh register generation and cancellation signal per cycle.
        let register = Arc::new(BitRegister::new());
        let cancel = Arc::new(AtomicBool::new(false));
        let workers = RaceWorkerPair::spawn(&register, &cancel);

        self.register = register;
        self.cancel = Some(cancel);
        self.workers = Some(workers);
        self.limiter.reset();
        self.state = RandomizerState::Running;
        log::debug!(
            "powered up: worker pair racing at {:?} sample floor",
            self.limiter.min_interval()
        );
        Ok(())
    }

    /// Signal both workers to stop and mark the engine stopped.
    ///
    /// Termination is best-effort and asynchronous: the workers observe the
    /// cancellation flag on their next iteration and are not joined, so one
    /// may still be spinning briefly after this returns.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state == RandomizerState::Stopped {
            return Err(RandomizerError::NotRunning);
        }
        if let Some(cancel) = self.cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
        self.workers = None;
        self.state = RandomizerState::Stopped;
        log::debug!("shut down: worker pair cancelled");
        Ok(())
    }

    /// Sample one pseudorandom bit.
    ///
    /// Blocks for whatever remains of the configured interval since the
    /// previous sample, then reads whichever worker's write is currently
    /// sitting in the register. Fails with [`RandomizerError::NotRunning`]
    /// while stopped.
    pub fn get_bit(&mut self) -> Result<u8> {
        if self.state != RandomizerState::Running {
            return Err(RandomizerError::NotRunning);
        }
        self.limiter.pace();
        Ok(self.register.load())
    }

    /// Sample `amount` bits in draw order. Expected wall-clock cost is
    /// `amount` times the configured interval. The first failure propagates
    /// and discards partial results.
    pub fn get_bits(&mut self, amount: usize) -> Result<Vec<u8>> {
        let mut bits = Vec::with_capacity(amount);
        for _ in 0..amount {
            bits.push(self.get_bit()?);
        }
        Ok(bits)
    }

    /// Sample a uniformly distributed integer in `[lower, upper)`.
    ///
    /// Draws `ceil(log2(upper - lower))` bits, composes them MSB-first, and
    /// rejects out-of-range candidates rather than folding them back with
    /// modulo, which would bias the distribution toward low values. The
    /// retry loop is bounded only probabilistically: acceptance probability
    /// is above one half per round, so the expected number of rounds is
    /// below two.
    pub fn get_int(&mut self, lower: i64, upper: i64) -> Result<i64> {
        if self.state != RandomizerState::Running {
            return Err(RandomizerError::NotRunning);
        }
        if lower >= upper {
            return Err(RandomizerError::InvalidBounds { lower, upper });
        }

        let range = upper.wrapping_sub(lower) as u64;
        let num_bits = bits_needed(range) as usize;
        loop {
            let bits = self.get_bits(num_bits)?;
            let raw = compose_bits(&bits)?;
            // Candidate arithmetic in i128: lower + raw can exceed i64
            // before the range check rules it out.
            let candidate = i128::from(lower) + i128::from(raw);
            if candidate < i128::from(upper) {
                return Ok(candidate as i64);
            }
            log::debug!("rejected out-of-range candidate {candidate}, redrawing");
        }
    }

    /// Sample `amount` integers in `[lower, upper)`, in draw order. The
    /// first failure propagates and discards partial results.
    pub fn get_ints(&mut self, amount: usize, lower: i64, upper: i64) -> Result<Vec<i64>> {
        let mut values = Vec::with_capacity(amount);
        for _ in 0..amount {
            values.push(self.get_int(lower, upper)?);
        }
        Ok(values)
    }

    pub fn is_running(&self) -> bool {
        self.state == RandomizerState::Running
    }

    /// Configured minimum spacing between samples.
    pub fn interval(&self) -> Duration {
        self.limiter.min_interval()
    }
}

impl Drop for Randomizer {
    // Engines dropped while running still cancel their workers; otherwise
    // the pair would spin for the rest of the process.
    fn drop(&mut self) {
        if let Some(cancel) = &self.cancel {
            cancel.store(true, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_interval_below_floor() {
        assert_eq!(
            Randomizer::new(19).err(),
            Some(RandomizerError::InvalidInterval { millis: 19 })
        );
        assert!(Randomizer::new(MIN_INTERVAL_MILLIS).is_ok());
    }

    #[test]
    fn starts_stopped() {
        let rng = Randomizer::new(20).unwrap();
        assert!(!rng.is_running());
        assert_eq!(rng.interval(), Duration::from_millis(20));
    }

    #[test]
    fn sampling_requires_running_state() {
        let mut rng = Randomizer::new(20).unwrap();
        assert_eq!(rng.get_bit(), Err(RandomizerError::NotRunning));
        assert_eq!(rng.get_int(0, 10), Err(RandomizerError::NotRunning));

        rng.powerup().unwrap();
        rng.shutdown().unwrap();
        assert_eq!(rng.get_bit(), Err(RandomizerError::NotRunning));
    }

    #[test]
    fn lifecycle_misuse_is_rejected() {
        let mut rng = Randomizer::new(20).unwrap();
        assert_eq!(rng.shutdown(), Err(RandomizerError::NotRunning));

        rng.powerup().unwrap();
        assert_eq!(rng.powerup(), Err(RandomizerError::AlreadyRunning));

        rng.shutdown().unwrap();
        assert_eq!(rng.shutdown(), Err(RandomizerError::NotRunning));
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let mut rng = Randomizer::new(20).unwrap();
        rng.powerup().unwrap();
        assert_eq!(
            rng.get_int(5, 5),
            Err(RandomizerError::InvalidBounds { lower: 5, upper: 5 })
        );
        assert_eq!(
            rng.get_int(9, 3),
            Err(RandomizerError::InvalidBounds { lower: 9, upper: 3 })
        );
        rng.shutdown().unwrap();
    }

    #[test]
    fn unit_range_draws_zero_bits() {
        let mut rng = Randomizer::new(20).unwrap();
        rng.powerup().unwrap();
        // range 1 needs zero bits, so this returns without rate limiting.
        assert_eq!(rng.get_int(7, 8).unwrap(), 7);
        assert_eq!(rng.get_int(-3, -2).unwrap(), -3);
        rng.shutdown().unwrap();
    }

    #[test]
    fn powerup_works_again_after_shutdown() {
        let mut rng = Randomizer::new(20).unwrap();
        for _ in 0..3 {
            rng.powerup().unwrap();
            let bit = rng.get_bit().unwrap();
            assert!(bit <= 1);
            rng.shutdown().unwrap();
        }
    }
}
