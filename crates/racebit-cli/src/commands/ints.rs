use super::CommandResult;

pub fn run(count: usize, lower: i64, upper: i64, interval: u64) -> CommandResult {
    let mut rng = super::powered_engine(interval)?;
    for _ in 0..count {
        println!("{}", rng.get_int(lower, upper)?);
    }
    rng.shutdown()?;
    Ok(())
}
