//! Shared domain types.
//!
//! These types are intentionally lightweight: the whole run is a single pass
//! over a small in-memory history, so everything here is plain data with no
//! behavior beyond construction.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// One entry of the history file.
///
/// The browser extension writes records shaped like:
///
/// ```json
/// { "date": "2025-01-01", "totals": { "co2": 1234.5 } }
/// ```
///
/// but the container/value keys vary between installs, so everything except
/// the date is captured as raw JSON and resolved at extraction time.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    /// Recording date, when present. Informational only: the fit uses the
    /// record's position in the file, not its date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// All remaining fields of the record, untyped.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// One regression observation: the record's 0-based position and the CO₂
/// value extracted from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub index: usize,
    pub value: f64,
}

/// The fitted model: `value = slope * index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedLine {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Goodness-of-fit diagnostics for the stderr summary.
#[derive(Debug, Clone, Copy)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Summary stats about the history actually used for fitting.
#[derive(Debug, Clone)]
pub struct HistoryStats {
    pub n_records: usize,
    /// Records where the value was missing or non-numeric and `0.0` was
    /// substituted.
    pub n_defaulted: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub value_min: f64,
    pub value_max: f64,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub input: PathBuf,
    /// Key of the per-record object holding the totals (`"totals"` by default).
    pub container_key: String,
    /// Key inside the container holding the cumulative CO₂ grams (`"co2"`).
    pub value_key: String,
    /// Suppress the diagnostic summary on stderr.
    pub quiet: bool,
}
