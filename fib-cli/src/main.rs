use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fib_core::{run, DEFAULT_INPUT};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fib-cli",
    version,
    about = "Time a naive recursive Fibonacci computation.",
    long_about = "Compute the n-th Fibonacci number by plain double recursion and report \
                  the result together with the elapsed wall-clock time in milliseconds."
)]
struct Cli {
    /// Index of the Fibonacci number to compute.
    #[arg(value_name = "N", default_value_t = DEFAULT_INPUT)]
    n: u32,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.n, &mut out).with_context(|| format!("benchmark for n={} failed", cli.n))?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

// Diagnostics go to stderr; stdout carries only the report.
fn setup_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
