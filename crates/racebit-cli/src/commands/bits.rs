use super::CommandResult;

pub fn run(count: usize, interval: u64) -> CommandResult {
    let mut rng = super::powered_engine(interval)?;
    for _ in 0..count {
        println!("{}", rng.get_bit()?);
    }
    rng.shutdown()?;
    Ok(())
}
