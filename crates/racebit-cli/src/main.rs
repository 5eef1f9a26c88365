//! CLI for racebit — pseudorandom bits from thread-scheduling races.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "racebit")]
#[command(about = "racebit — pseudorandom bits from thread-scheduling races")]
#[command(version = racebit_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample bits and print them one per line
    Bits {
        /// Number of bits to sample
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Minimum spacing between samples in milliseconds (>= 20)
        #[arg(long, default_value = "20")]
        interval: u64,
    },

    /// Sample bounded integers and print them one per line
    Ints {
        /// Number of integers to sample
        #[arg(long, default_value = "10")]
        count: usize,

        /// Inclusive lower bound
        #[arg(long)]
        lower: i64,

        /// Exclusive upper bound
        #[arg(long)]
        upper: i64,

        /// Minimum spacing between bit samples in milliseconds (>= 20)
        #[arg(long, default_value = "20")]
        interval: u64,
    },

    /// Sample a bit stream and run the statistical battery over it
    Check {
        /// Number of bits to sample for the battery
        #[arg(long, default_value = "1000")]
        bits: usize,

        /// Minimum spacing between samples in milliseconds (>= 20)
        #[arg(long, default_value = "20")]
        interval: u64,

        /// Write the full report as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bits { count, interval } => commands::bits::run(count, interval),
        Commands::Ints {
            count,
            lower,
            upper,
            interval,
        } => commands::ints::run(count, lower, upper, interval),
        Commands::Check {
            bits,
            interval,
            output,
        } => commands::check::run(bits, interval, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
