//! Output formatting: the JS snippet and the stderr run summary.
//!
//! We keep all formatting in one place so the extraction/fitting code stays
//! clean and the snippet text (which downstream users paste verbatim) is
//! localized and snapshot-testable.

pub mod snippet;

pub use snippet::*;

use crate::domain::{FitQuality, FittedLine, HistoryStats, TrendConfig};

/// Format the diagnostic run summary.
///
/// This goes to stderr: stdout is reserved for the snippet so that re-runs on
/// identical input produce byte-identical, pipeable output.
pub fn format_run_summary(
    config: &TrendConfig,
    stats: &HistoryStats,
    line: &FittedLine,
    quality: &FitQuality,
) -> String {
    let mut out = String::new();

    out.push_str("=== co2trend - CO₂ history trend fit ===\n");
    out.push_str(&format!("Input: {}\n", config.input.display()));

    out.push_str(&format!("Records: n={}", stats.n_records));
    if let (Some(first), Some(last)) = (stats.first_date, stats.last_date) {
        out.push_str(&format!(" | dates=[{first}, {last}]"));
    }
    if stats.n_defaulted > 0 {
        out.push_str(&format!(
            " | {} without {}.{} (defaulted to 0)",
            stats.n_defaulted, config.container_key, config.value_key
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Values: [{:.1}, {:.1}] g\n",
        stats.value_min, stats.value_max
    ));
    out.push_str(&format!(
        "Fit: slope={:.4} g/record | intercept={:.4} g | rmse={:.3} (n={})\n",
        line.slope, line.intercept, quality.rmse, quality.n
    ));

    out
}
