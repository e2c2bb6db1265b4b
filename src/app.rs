//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the load → extract → fit pipeline
//! - prints the JS snippet (stdout) and the run summary (stderr)
//!
//! stdout carries only the snippet so it can be redirected or diffed;
//! everything diagnostic goes to stderr.

use clap::Parser;

use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `co2trend` binary.
pub fn run() -> Result<(), AppError> {
    let config = crate::cli::Cli::parse().into_config();
    let run = pipeline::run_fit(&config)?;

    print!("{}", crate::report::format_snippet(&run.line));

    if !config.quiet {
        eprint!(
            "{}",
            crate::report::format_run_summary(&config, &run.stats, &run.line, &run.quality)
        );
    }

    Ok(())
}
