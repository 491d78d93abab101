//! Side-by-side comparison of every strategy over the same input.
//!
//! Each strategy is run into a counting sink that records bytes, write calls,
//! and a running checksum of the output. The runner refuses to return a report
//! where strategies disagree.

use crate::error::{CensorError, Result};
use crate::strategy::{Censor, Strategy};
use csv::Writer;
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// One row of the comparison report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    /// Strategy name as accepted by `--strategy`.
    pub strategy: String,

    /// Digits censored per run.
    pub censored: usize,

    /// Bytes written to the sink per run.
    pub bytes_written: u64,

    /// Sink write calls per run.
    pub writes: u64,

    /// Mean wall time per run, in microseconds.
    pub elapsed_micros: u64,

    #[serde(skip)]
    checksum: u64,
}

/// A sink that discards its input but remembers how it was written.
#[derive(Debug)]
pub struct CountingSink {
    bytes: u64,
    writes: u64,
    checksum: u64,
}

impl CountingSink {
    pub fn new() -> Self {
        CountingSink {
            bytes: 0,
            writes: 0,
            checksum: FNV_OFFSET,
        }
    }

    /// Total bytes accepted.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Number of `write` calls.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// FNV-1a over every byte accepted. Independent of how the bytes were split
    /// across writes.
    pub fn checksum(&self) -> u64 {
        self.checksum
    }
}

impl Default for CountingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes += buf.len() as u64;
        for &byte in buf {
            self.checksum ^= u64::from(byte);
            self.checksum = self.checksum.wrapping_mul(FNV_PRIME);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs every [`Strategy`] `iterations` times (at least once) over `digits`.
///
/// Returns [`CensorError::StrategyMismatch`] if any strategy's output or count
/// differs from the first strategy's.
pub fn run_report(censor: &Censor, digits: &str, iterations: usize) -> Result<Vec<StrategyReport>> {
    let iterations = iterations.max(1);
    let mut reports = Vec::with_capacity(Strategy::ALL.len());

    for strategy in Strategy::ALL {
        let mut last = CountingSink::new();
        let mut censored = 0;

        let start = Instant::now();
        for _ in 0..iterations {
            let mut sink = CountingSink::new();
            censored = censor.censor_blocking(strategy, digits, &mut sink)?;
            last = sink;
        }
        let elapsed = start.elapsed();

        let report = StrategyReport {
            strategy: strategy.to_string(),
            censored,
            bytes_written: last.bytes(),
            writes: last.writes(),
            elapsed_micros: (elapsed.as_micros() / iterations as u128) as u64,
            checksum: last.checksum(),
        };
        debug!("{:?}", report);
        reports.push(report);
    }

    check_equivalence(&reports)?;

    info!(
        "Compared {} strategies over {} bytes ({} iterations each)",
        reports.len(),
        digits.len(),
        iterations
    );

    Ok(reports)
}

fn check_equivalence(reports: &[StrategyReport]) -> Result<()> {
    let Some((first, rest)) = reports.split_first() else {
        return Ok(());
    };

    for report in rest {
        if report.censored != first.censored
            || report.bytes_written != first.bytes_written
            || report.checksum != first.checksum
        {
            return Err(CensorError::StrategyMismatch {
                strategy: report.strategy.clone(),
                expected: format!(
                    "{} censored, {} bytes, checksum {:016x} ({})",
                    first.censored, first.bytes_written, first.checksum, first.strategy
                ),
                found: format!(
                    "{} censored, {} bytes, checksum {:016x}",
                    report.censored, report.bytes_written, report.checksum
                ),
            });
        }
    }

    Ok(())
}

/// Writes the report as CSV with a header row.
pub fn write_report<W: Write>(reports: &[StrategyReport], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for report in reports {
        csv_writer.serialize(report)?;
    }

    csv_writer.flush()?;
    Ok(())
}
