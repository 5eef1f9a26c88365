//! Bit-sequence-to-integer composition for rejection sampling.
//!
//! Pure helpers: no String round-trip, just MSB-first binary composition of
//! raw bits into an unsigned integer.

use crate::error::{RandomizerError, Result};

/// Number of bits needed to cover a range of `range` values:
/// `ceil(log2(range))`, with `range <= 1` needing zero bits.
pub fn bits_needed(range: u64) -> u32 {
    if range <= 1 {
        0
    } else {
        u64::BITS - (range - 1).leading_zeros()
    }
}

/// Interpret `bits` as an unsigned binary numeral, most-significant bit
/// first, matching draw order. Any value outside {0, 1} is an internal
/// invariant violation and yields [`RandomizerError::BitConversion`].
pub fn compose_bits(bits: &[u8]) -> Result<u64> {
    let mut raw = 0u64;
    for &bit in bits {
        if bit > 1 {
            return Err(RandomizerError::BitConversion { bit });
        }
        raw = (raw << 1) | u64::from(bit);
    }
    Ok(raw)
}
