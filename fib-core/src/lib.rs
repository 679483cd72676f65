mod error;
mod fib;
mod report;

pub use crate::error::BenchError;
pub use crate::fib::{check_input, fib, DEFAULT_INPUT, MAX_INPUT};
pub use crate::report::{measure, run, Report, Stopwatch};
