//! Censored Digits CLI
//!
//! Reads a digit file and writes its censored form to stdout, or compares all
//! strategies and writes a CSV report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- pi10k.txt > censored.txt
//! cargo run -- --strategy iterative --chunk-size 1024 pi10k.txt
//! cargo run -- --report --iterations 100 pi10k.txt > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity
//! - `CENSOR_STRATEGY`, `CENSOR_CHUNK_SIZE`: defaults for the matching flags

use censored_digits::{
    run_report, write_report, Censor, CensorConfig, Result, Strategy, DEFAULT_CHUNK_SIZE,
};
use clap::Parser;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "censored-digits")]
#[command(about = "Censor every digit of pi that is smaller than the one before it", long_about = None)]
struct Cli {
    /// File holding the digits, starting with "3."
    input: PathBuf,

    /// Strategy: inplace, inplace-sync, iterative, iterative-string
    #[arg(long, env = "CENSOR_STRATEGY", default_value_t = Strategy::InPlace)]
    strategy: Strategy,

    /// Bytes per write for the chunked strategies
    #[arg(long, env = "CENSOR_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Run every strategy and print a CSV comparison instead of the digits
    #[arg(long)]
    report: bool,

    /// Runs per strategy in report mode
    #[arg(long, default_value_t = 1)]
    iterations: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let censor = Censor::new(CensorConfig::new(cli.chunk_size)?)?;

    let text = fs::read_to_string(&cli.input)?;
    // Asset files usually end with a newline that is not part of the digits
    let digits = text.trim_end();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if cli.report {
        let reports = run_report(&censor, digits, cli.iterations)?;
        write_report(&reports, &mut handle)?;
        return Ok(());
    }

    let censored = censor.censor_blocking(cli.strategy, digits, &mut handle)?;
    handle.flush()?;

    info!(
        "Censored {} of {} digits with {}",
        censored,
        digits.len().saturating_sub(2),
        cli.strategy
    );

    Ok(())
}
