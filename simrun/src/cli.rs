use crate::runner::RunParameters;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ASSET: &str = "assets/simple_box.xml";

/// Load a scene, step it for a bounded run and optionally show a live viewer.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "simrun", version, about, long_about = None)]
pub struct Cli {
    /// Path to the MJCF scene file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ASSET)]
    pub asset: PathBuf,

    /// Run without opening a viewer window
    #[arg(long)]
    pub headless: bool,

    /// Number of simulation steps to run (0 = unlimited until --max-time)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub steps: u64,

    /// Maximum wall-clock seconds to simulate (0 = unlimited)
    #[arg(
        long = "max-time",
        value_name = "SECS",
        default_value_t = 5.0,
        value_parser = parse_seconds
    )]
    pub max_time: f64,
}

impl Cli {
    #[must_use]
    pub fn run_parameters(&self) -> RunParameters {
        RunParameters {
            headless: self.headless,
            step_limit: self.steps,
            max_seconds: self.max_time,
        }
    }
}

fn parse_seconds(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("must be a number of seconds: {e}"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!(
            "must be a finite, non-negative number of seconds, got {raw}"
        ));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["simrun"]).unwrap();
        assert_eq!(cli.asset, PathBuf::from(DEFAULT_ASSET));
        assert!(!cli.headless);
        assert_eq!(cli.run_parameters(), RunParameters::default());
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "simrun",
            "--asset",
            "scenes/pile.xml",
            "--headless",
            "--steps",
            "250",
            "--max-time",
            "0.5",
        ])
        .unwrap();
        assert_eq!(
            cli.run_parameters(),
            RunParameters {
                headless: true,
                step_limit: 250,
                max_seconds: 0.5,
            }
        );
        assert_eq!(cli.asset, PathBuf::from("scenes/pile.xml"));
    }

    #[test]
    fn non_numeric_steps_rejected() {
        let err = Cli::try_parse_from(["simrun", "--steps", "ten"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("--steps"));
    }

    #[test]
    fn non_numeric_max_time_rejected() {
        let err = Cli::try_parse_from(["simrun", "--max-time", "soon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("--max-time"));
    }

    #[test]
    fn negative_max_time_rejected() {
        assert!(Cli::try_parse_from(["simrun", "--max-time=-1"]).is_err());
        assert!(Cli::try_parse_from(["simrun", "--max-time", "inf"]).is_err());
    }

    #[test]
    fn help_is_reported_as_display() {
        let err = Cli::try_parse_from(["simrun", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
