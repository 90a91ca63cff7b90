//! Times one call of [`fibonacci`] and prints the result and elapsed seconds.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::HarnessError;
use crate::fib::fibonacci;

/// Index computed by the `fib` binary.
pub const DEFAULT_N: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub n: i64,
    pub value: i64,
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time truncated to whole seconds. This floors the measured
    /// duration rather than differencing two wall-clock second stamps, so a
    /// sub-second run that crosses a second boundary still reports 0.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

pub fn measure(n: i64) -> Measurement {
    info!(n, "computing fibonacci");

    let start = Instant::now();
    let value = fibonacci(black_box(n));
    let elapsed = start.elapsed();

    debug!(n, value, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "done");
    Measurement { n, value, elapsed }
}

/// Writes the value on the first line and whole elapsed seconds on the second.
pub fn write_report<W: Write>(measurement: &Measurement, mut out: W) -> Result<(), HarnessError> {
    writeln!(out, "{}", measurement.value)?;
    writeln!(out, "{}", measurement.elapsed_secs())?;
    out.flush()?;
    Ok(())
}

pub fn run<W: Write>(n: i64, out: W) -> Result<Measurement, HarnessError> {
    let measurement = measure(n);
    write_report(&measurement, out)?;
    Ok(measurement)
}
