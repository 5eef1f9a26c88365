//! Integration tests for racebit-core.
//!
//! These tests exercise the full engine pipeline against a real worker race:
//! construction → powerup → rate-limited sampling → shutdown. They spend
//! real wall-clock time in the rate limiter, so the heavier statistical
//! checks are `#[ignore]`d and run on demand.

use std::time::{Duration, Instant};

use racebit_core::{Randomizer, RandomizerError};

#[test]
fn single_bit_lifecycle() {
    let mut rng = Randomizer::new(50).expect("interval 50 is valid");
    rng.powerup().expect("powerup from stopped");
    let bit = rng.get_bit().expect("sample while running");
    assert!(bit <= 1, "bit out of domain: {bit}");
    rng.shutdown().expect("shutdown from running");
}

#[test]
fn bits_are_binary_and_counted() {
    let mut rng = Randomizer::new(20).unwrap();
    rng.powerup().unwrap();
    let bits = rng.get_bits(30).unwrap();
    assert_eq!(bits.len(), 30);
    assert!(bits.iter().all(|&b| b <= 1), "non-binary bit in {bits:?}");
    rng.shutdown().unwrap();
}

#[test]
fn consecutive_samples_respect_the_interval() {
    let mut rng = Randomizer::new(50).unwrap();
    rng.powerup().unwrap();
    rng.get_bit().unwrap();
    let start = Instant::now();
    rng.get_bit().unwrap();
    assert!(
        start.elapsed() >= Duration::from_millis(50),
        "samples only {:?} apart",
        start.elapsed()
    );
    rng.shutdown().unwrap();
}

#[test]
fn bounded_int_stays_in_range() {
    let mut rng = Randomizer::new(44).unwrap();
    rng.powerup().unwrap();
    let value = rng.get_int(20, 100).unwrap();
    assert!((20..100).contains(&value), "value out of range: {value}");
    rng.shutdown().unwrap();
}

#[test]
fn bounded_ints_stay_in_range() {
    let mut rng = Randomizer::new(27).unwrap();
    rng.powerup().unwrap();
    let values = rng.get_ints(20, 20, 100).unwrap();
    assert_eq!(values.len(), 20);
    for value in &values {
        assert!((20..100).contains(value), "value out of range: {value}");
    }
    rng.shutdown().unwrap();
}

#[test]
fn negative_bounds_work() {
    let mut rng = Randomizer::new(20).unwrap();
    rng.powerup().unwrap();
    let value = rng.get_int(-8, 8).unwrap();
    assert!((-8..8).contains(&value), "value out of range: {value}");
    rng.shutdown().unwrap();
}

#[test]
fn sampling_fails_cleanly_around_the_lifecycle() {
    let mut rng = Randomizer::new(20).unwrap();
    assert_eq!(rng.get_bits(3), Err(RandomizerError::NotRunning));
    rng.powerup().unwrap();
    rng.shutdown().unwrap();
    assert_eq!(
        rng.get_ints(3, 0, 10),
        Err(RandomizerError::NotRunning)
    );
}

// ~20 seconds of wall clock at the 20 ms floor.
#[test]
#[ignore]
fn bit_stream_is_roughly_unbiased() {
    let mut rng = Randomizer::new(20).unwrap();
    rng.powerup().unwrap();
    let bits = rng.get_bits(1000).unwrap();
    rng.shutdown().unwrap();

    let ones = bits.iter().filter(|&&b| b == 1).count();
    let mean = ones as f64 / bits.len() as f64;
    assert!(
        (0.45..=0.55).contains(&mean),
        "sample mean {mean:.3} outside [0.45, 0.55]"
    );
}

// ~20 seconds of wall clock at the 20 ms floor.
#[test]
#[ignore]
fn bit_stream_passes_the_monobit_battery() {
    let mut rng = Randomizer::new(20).unwrap();
    rng.powerup().unwrap();
    let bits = rng.get_bits(1000).unwrap();
    rng.shutdown().unwrap();

    let result = racebit_tests::monobit_frequency(&bits);
    assert!(
        result.passed,
        "monobit failed: p={:?}, {}",
        result.p_value, result.details
    );
}
