//! # simrun
//!
//! Entry point for the simulation runner binary. Run with `--help` for the
//! available flags.

use anyhow::Result;
use clap::Parser;
use simrun::app;
use simrun::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::init_tracing();

    let steps = app::run(&cli)?;
    println!("Simulation finished after {steps} steps.");
    Ok(())
}
