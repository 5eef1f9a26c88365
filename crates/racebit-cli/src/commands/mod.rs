pub mod bits;
pub mod check;
pub mod ints;

use racebit_core::Randomizer;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build and power up an engine at the requested interval.
pub fn powered_engine(interval: u64) -> Result<Randomizer, racebit_core::RandomizerError> {
    let mut rng = Randomizer::new(interval)?;
    rng.powerup()?;
    Ok(rng)
}
