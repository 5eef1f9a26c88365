//! # racebit-core
//!
//! **Thread-scheduling races as an entropy source.**
//!
//! `racebit-core` generates pseudorandom bits from the nondeterministic
//! interleaving of two competing writer threads. One worker spins trying to
//! force a shared register to `0`, the other to `1`; whichever write the
//! scheduler lands last before a sample is taken wins that sample. There is
//! no algorithmic PRNG anywhere in the pipeline.
//!
//! ## Quick Start
//!
//! ```no_run
//! use racebit_core::Randomizer;
//!
//! # fn main() -> Result<(), racebit_core::RandomizerError> {
//! // Minimum interval between samples is 20 ms.
//! let mut rng = Randomizer::new(20)?;
//!
//! rng.powerup()?;
//! let bit = rng.get_bit()?;
//! assert!(bit <= 1);
//!
//! // Bounded integers via rejection sampling over raw bits.
//! let roll = rng.get_int(1, 7)?;
//! assert!((1..7).contains(&roll));
//! rng.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Worker pair → shared bit register → rate-limited sampling → rejection
//! sampling for bounded integers.
//!
//! The rate limiter enforces a floor on sampling frequency so the workers get
//! enough uncontended time between samples to actually flip the register.
//! While powered up the workers busy-wait continuously; the CPU cost is a
//! deliberate trade-off for contention-driven unpredictability, documented on
//! [`RaceWorkerPair`].
//!
//! Output is *not* cryptographically secure and is not seedable or
//! reproducible. Use it where scheduler noise is the point, not where an
//! adversary is.

pub mod error;
pub mod limiter;
pub mod randomizer;
pub mod register;
pub mod sampler;
pub mod worker;

pub use error::RandomizerError;
pub use limiter::RateLimiter;
pub use randomizer::{MIN_INTERVAL_MILLIS, Randomizer, RandomizerState};
pub use register::BitRegister;
pub use worker::RaceWorkerPair;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
