//! Shared bit register — the single cell both race workers fight over.

use std::sync::atomic::{AtomicU8, Ordering};

/// A single bit of shared state, written by both race workers and read by
/// every sample.
///
/// Reads and writes both go through atomic operations so a sampler can never
/// observe a torn or stale value while the workers are mid-write. Worker
/// writes use compare-and-swap keyed on the opposing value, which makes the
/// two writers mutually exclusive per flip: a worker's write only lands when
/// the register currently holds the other worker's bit.
#[derive(Debug, Default)]
pub struct BitRegister(AtomicU8);

impl BitRegister {
    /// New register holding 0.
    pub fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Current register value, 0 or 1.
    pub fn load(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }

    /// Attempt to flip the register to `bit`, succeeding only if it currently
    /// holds the opposing value. Returns whether the write landed.
    pub fn flip_to(&self, bit: u8) -> bool {
        self.0
            .compare_exchange(bit ^ 1, bit, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }
}
