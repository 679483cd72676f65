use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::error::BenchError;
use crate::fib::{check_input, fib};

/// Monotonic wall-clock timer with millisecond readout.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Whole milliseconds since [`Stopwatch::start`]. Zero if the clock has not advanced.
    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Outcome of a single timed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub n: u32,
    pub result: u64,
    pub elapsed_millis: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fibonacci series for n={}: {}", self.n, self.result)?;
        write!(f, "Time elapsed: {} milliseconds", self.elapsed_millis)
    }
}

/// Times `fib(n)`; nothing runs between the two clock samples but the call.
pub fn measure(n: u32) -> Result<Report, BenchError> {
    let n = check_input(n)?;
    debug!(n, "starting computation");

    let stopwatch = Stopwatch::start();
    let result = fib(black_box(n));
    let elapsed_millis = stopwatch.elapsed_millis();

    debug!(n, result, elapsed_millis, "computation finished");
    Ok(Report {
        n,
        result,
        elapsed_millis,
    })
}

pub fn run<W: Write>(n: u32, out: &mut W) -> Result<Report, BenchError> {
    let report = measure(n)?;
    writeln!(out, "{report}")?;
    Ok(report)
}
