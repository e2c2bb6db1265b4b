//! Command-line parsing.
//!
//! A single flat argument set: the tool does exactly one thing, so there are
//! no subcommands. Defaults reproduce the original workflow of running the
//! tool next to `co2_history.json` with no arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::TrendConfig;

/// Fit a linear CO₂ trend from a JSON history and emit a JS model snippet.
#[derive(Debug, Parser)]
#[command(name = "co2trend", version, about)]
pub struct Cli {
    /// Path to the history file (a JSON array of records).
    #[arg(short = 'i', long, default_value = "co2_history.json")]
    pub input: PathBuf,

    /// Key of the per-record object holding the totals.
    #[arg(long, default_value = "totals")]
    pub container_key: String,

    /// Key inside the container holding the cumulative CO₂ value (grams).
    #[arg(long, default_value = "co2")]
    pub value_key: String,

    /// Suppress the diagnostic summary printed to stderr.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    pub fn into_config(self) -> TrendConfig {
        TrendConfig {
            input: self.input,
            container_key: self.container_key,
            value_key: self.value_key,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_workflow() {
        let cli = Cli::parse_from(["co2trend"]);
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("co2_history.json"));
        assert_eq!(config.container_key, "totals");
        assert_eq!(config.value_key, "co2");
        assert!(!config.quiet);
    }

    #[test]
    fn keys_and_input_are_overridable() {
        let cli = Cli::parse_from([
            "co2trend",
            "-i",
            "history/march.json",
            "--container-key",
            "sums",
            "--value-key",
            "carbon",
            "-q",
        ]);
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("history/march.json"));
        assert_eq!(config.container_key, "sums");
        assert_eq!(config.value_key, "carbon");
        assert!(config.quiet);
    }
}
