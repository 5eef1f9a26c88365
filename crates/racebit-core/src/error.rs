//! Error domain for the race-based randomizer.

use thiserror::Error;

/// Errors surfaced by [`Randomizer`](crate::Randomizer) operations.
///
/// Lifecycle misuse (`AlreadyRunning` / `NotRunning`) is always recoverable
/// by calling the operations in the correct order. `InvalidInterval` and
/// `InvalidBounds` are caller errors caught at the API boundary.
/// `BitConversion` signals an internal invariant violation and should never
/// surface from a correctly generated bit stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomizerError {
    /// Construction rejected: sampling interval below the 20 ms floor.
    #[error("sampling interval must be at least 20 ms, got {millis}")]
    InvalidInterval { millis: u64 },

    /// `powerup` called while already running.
    #[error("cannot power up a running randomizer")]
    AlreadyRunning,

    /// A sampling or shutdown operation was called while stopped.
    #[error("randomizer is not running")]
    NotRunning,

    /// Integer sampling called with `lower >= upper`.
    #[error("lower bound {lower} must be strictly below upper bound {upper}")]
    InvalidBounds { lower: i64, upper: i64 },

    /// The bit stream produced a value outside {0, 1}.
    #[error("bit stream produced non-binary value {bit}")]
    BitConversion { bit: u8 },
}

/// Convenience alias for results of randomizer operations.
pub type Result<T> = std::result::Result<T, RandomizerError>;
