//! NIST SP 800-22 inspired checks for race-sampled bit streams.
//!
//! Operates directly on bit slices as the engine produces them: one bit per
//! element, each 0 or 1. Each check returns a [`TestResult`] with a p-value,
//! a pass/fail determination at the 0.01 level, and a letter grade (A
//! through F).

use serde::Serialize;
use statrs::function::erf::erfc;

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of a single randomness check.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold (default 0.01).
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        match p {
            Some(p) => p >= threshold,
            None => false,
        }
    }
}

/// Return a failing `TestResult` when the bit stream is too short.
fn insufficient(name: &str, needed: usize, got: usize) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed: false,
        p_value: None,
        statistic: 0.0,
        details: format!("Insufficient data: need {needed} bits, got {got}"),
        grade: 'F',
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Checks
// ═══════════════════════════════════════════════════════════════════════════════

/// Monobit frequency -- proportion of 1s vs 0s should be ~50%.
pub fn monobit_frequency(bits: &[u8]) -> TestResult {
    let name = "Monobit Frequency";
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let s: i64 = bits.iter().map(|&b| if b == 1 { 1i64 } else { -1i64 }).sum();
    let s_obs = (s as f64).abs() / (n as f64).sqrt();
    let p = erfc(s_obs / 2.0_f64.sqrt());
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: s_obs,
        details: format!("S={s}, n={n}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Runs -- total number of uninterrupted runs of identical bits should match
/// the expectation under the observed proportion of ones.
///
/// Prerequisite per SP 800-22: the monobit proportion must already be within
/// 2/sqrt(n) of one half, otherwise the runs statistic is meaningless and
/// the check fails outright.
pub fn runs(bits: &[u8]) -> TestResult {
    let name = "Runs";
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let ones = bits.iter().filter(|&&b| b == 1).count();
    let pi = ones as f64 / n as f64;
    let tau = 2.0 / (n as f64).sqrt();
    if (pi - 0.5).abs() >= tau {
        return TestResult {
            name: name.to_string(),
            passed: false,
            p_value: None,
            statistic: pi,
            details: format!("Prerequisite failed: pi={pi:.4} deviates from 0.5 by >= {tau:.4}"),
            grade: 'F',
        };
    }

    let v_obs = 1 + bits.windows(2).filter(|w| w[0] != w[1]).count();
    let expected = 2.0 * n as f64 * pi * (1.0 - pi);
    let denom = 2.0 * (2.0 * n as f64).sqrt() * pi * (1.0 - pi);
    let p = erfc((v_obs as f64 - expected).abs() / denom);
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: v_obs as f64,
        details: format!("V={v_obs}, expected={expected:.1}, pi={pi:.4}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Run the full battery over one bit stream.
pub fn run_all(bits: &[u8]) -> Vec<TestResult> {
    vec![monobit_frequency(bits), runs(bits)]
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
