use serde::Serialize;

use racebit_tests::TestResult;

use super::CommandResult;

#[derive(Serialize)]
struct CheckReport {
    bits: usize,
    interval_ms: u64,
    ones: usize,
    mean: f64,
    results: Vec<TestResult>,
}

pub fn run(bits: usize, interval: u64, output: Option<&str>) -> CommandResult {
    let expected_secs = bits as u64 * interval / 1000;
    println!("Sampling {bits} bits at a {interval} ms floor (~{expected_secs}s)...\n");

    let mut rng = super::powered_engine(interval)?;
    let stream = rng.get_bits(bits)?;
    rng.shutdown()?;

    let ones = stream.iter().filter(|&&b| b == 1).count();
    let mean = ones as f64 / stream.len() as f64;
    let results = racebit_tests::run_all(&stream);

    println!("Bit stream: {ones}/{} ones (mean {mean:.3})\n", stream.len());
    println!("  {:<20} {:>8} {:>7} {:>6}", "Check", "p-value", "Grade", "Pass");
    println!("  {}", "-".repeat(45));
    for result in &results {
        let p = result
            .p_value
            .map_or_else(|| "-".to_string(), |p| format!("{p:.4}"));
        println!(
            "  {:<20} {:>8} {:>7} {:>6}",
            result.name,
            p,
            result.grade,
            if result.passed { "yes" } else { "NO" }
        );
    }

    if let Some(path) = output {
        let report = CheckReport {
            bits,
            interval_ms: interval,
            ones,
            mean,
            results,
        };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("\nReport written to {path}");
    }

    Ok(())
}
