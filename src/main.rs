use std::io;

use anyhow::Result;
use clap::Parser;
use fib40::{run, DEFAULT_N};
use tracing_subscriber::EnvFilter;

/// Compute fib(40) by naive recursion and print the elapsed whole seconds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the two report lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(DEFAULT_N, io::stdout().lock())?;
    Ok(())
}
