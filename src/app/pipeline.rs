//! The fit pipeline: load → extract → fit → summarize.
//!
//! Kept separate from `app` so tests can run the whole flow on in-memory
//! records without touching the filesystem, and so `app` stays pure
//! presentation (what goes to stdout vs stderr).

use crate::domain::{FitQuality, FittedLine, HistoryRecord, HistoryStats, TrendConfig};
use crate::error::AppError;
use crate::fit::{extract_points, fit_line};
use crate::io::load_history;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stats: HistoryStats,
    pub line: FittedLine,
    pub quality: FitQuality,
}

/// Execute the full pipeline against the configured history file.
pub fn run_fit(config: &TrendConfig) -> Result<RunOutput, AppError> {
    let records = load_history(&config.input)?;
    run_fit_with_records(config, &records)
}

/// Execute the pipeline with pre-loaded records.
pub fn run_fit_with_records(
    config: &TrendConfig,
    records: &[HistoryRecord],
) -> Result<RunOutput, AppError> {
    let extracted = extract_points(records, &config.container_key, &config.value_key);
    let (line, quality) = fit_line(&extracted.points)?;

    // fit_line rejected the empty case, so min/max folds below see >= 1 point.
    let mut value_min = f64::INFINITY;
    let mut value_max = f64::NEG_INFINITY;
    for p in &extracted.points {
        value_min = value_min.min(p.value);
        value_max = value_max.max(p.value);
    }

    let stats = HistoryStats {
        n_records: records.len(),
        n_defaulted: extracted.n_defaulted,
        first_date: records.iter().find_map(|r| r.date),
        last_date: records.iter().rev().find_map(|r| r.date),
        value_min,
        value_max,
    };

    Ok(RunOutput { stats, line, quality })
}
