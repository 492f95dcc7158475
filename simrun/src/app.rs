//! # Application Wiring
//!
//! Glue between the command line and the [`crate::runner`]: logging
//! setup, choosing the execution mode and running against the native
//! engine.

use crate::cli::Cli;
use crate::engine::NativeEngine;
use crate::runner;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Execution mode configuration for the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Attempt to open a viewer window
    Windowed,
    /// Run without any visual output
    Headless,
}

impl ExecutionMode {
    /// Honour `--headless`, and fall back to headless when the binary was
    /// compiled without the `render` feature.
    #[must_use]
    pub fn determine(headless_requested: bool) -> Self {
        if headless_requested || !cfg!(feature = "render") {
            ExecutionMode::Headless
        } else {
            ExecutionMode::Windowed
        }
    }

    #[must_use]
    pub fn is_headless(self) -> bool {
        matches!(self, ExecutionMode::Headless)
    }
}

/// Install the global `tracing` subscriber. Log lines go to stderr so that
/// stdout only carries the run summary. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the simulation described by `cli` and return the number of steps
/// completed.
///
/// # Errors
///
/// Returns the runner error for a missing asset or an engine failure.
pub fn run(cli: &Cli) -> Result<u64> {
    let mode = ExecutionMode::determine(cli.headless);
    if mode.is_headless() && !cli.headless {
        tracing::info!("Built without the `render` feature; running headless.");
    }

    let mut params = cli.run_parameters();
    params.headless = mode.is_headless();

    let steps = runner::run(&mut NativeEngine, &cli.asset, &params)?;
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_flag_always_wins() {
        assert_eq!(ExecutionMode::determine(true), ExecutionMode::Headless);
    }

    #[test]
    fn windowed_only_with_render_feature() {
        let expected = if cfg!(feature = "render") {
            ExecutionMode::Windowed
        } else {
            ExecutionMode::Headless
        };
        assert_eq!(ExecutionMode::determine(false), expected);
    }
}
