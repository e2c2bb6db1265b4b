//! Record → observation extraction.
//!
//! Each record contributes exactly one point: its 0-based position in the
//! file as `x`, and the numeric value found under
//! `record[container_key][value_key]` as `y`. A missing container, a missing
//! value key, or a non-numeric value all default to `0.0` rather than
//! failing, matching how the history writer treats days without data.
//!
//! Note the deliberate quirk: the regression's independent variable is the
//! record's *position*, not its date, so uneven gaps between recordings are
//! invisible to the fit. The slope reads as "grams per record".

use serde_json::Value;

use crate::domain::{HistoryRecord, SamplePoint};

/// Extraction output: one point per record, in input order, plus bookkeeping
/// about how many records had no usable value.
#[derive(Debug, Clone)]
pub struct ExtractedPoints {
    pub points: Vec<SamplePoint>,
    /// Records where `0.0` was substituted for a missing/non-numeric value.
    pub n_defaulted: usize,
}

/// Map each record to an (index, value) observation.
pub fn extract_points(
    records: &[HistoryRecord],
    container_key: &str,
    value_key: &str,
) -> ExtractedPoints {
    let mut points = Vec::with_capacity(records.len());
    let mut n_defaulted = 0;

    for (index, record) in records.iter().enumerate() {
        let value = record
            .fields
            .get(container_key)
            .and_then(|container| container.get(value_key))
            .and_then(Value::as_f64);

        if value.is_none() {
            n_defaulted += 1;
        }

        points.push(SamplePoint {
            index,
            value: value.unwrap_or(0.0),
        });
    }

    ExtractedPoints { points, n_defaulted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> HistoryRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn one_point_per_record_in_order() {
        let records = vec![
            record(r#"{ "totals": { "co2": 10.0 } }"#),
            record(r#"{ "totals": { "co2": 20.0 } }"#),
            record(r#"{ "totals": { "co2": 30.0 } }"#),
        ];

        let out = extract_points(&records, "totals", "co2");
        assert_eq!(out.points.len(), 3);
        assert_eq!(out.n_defaulted, 0);
        for (i, p) in out.points.iter().enumerate() {
            assert_eq!(p.index, i);
            assert!((p.value - (10.0 * (i + 1) as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let records = vec![
            record(r#"{ "totals": { "co2": 5.0 } }"#),
            record(r#"{ "totals": {} }"#),
            record(r#"{ "visits": 3 }"#),
            record(r#"{}"#),
        ];

        let out = extract_points(&records, "totals", "co2");
        assert_eq!(out.points.len(), 4);
        assert_eq!(out.n_defaulted, 3);
        assert!((out.points[0].value - 5.0).abs() < 1e-12);
        for p in &out.points[1..] {
            assert_eq!(p.value, 0.0);
        }
    }

    #[test]
    fn non_numeric_value_defaults_to_zero() {
        let records = vec![record(r#"{ "totals": { "co2": "lots" } }"#)];

        let out = extract_points(&records, "totals", "co2");
        assert_eq!(out.points[0].value, 0.0);
        assert_eq!(out.n_defaulted, 1);
    }

    #[test]
    fn keys_are_configurable() {
        let records = vec![record(r#"{ "sums": { "carbon": 2.5 } }"#)];

        let out = extract_points(&records, "sums", "carbon");
        assert!((out.points[0].value - 2.5).abs() < 1e-12);
        assert_eq!(out.n_defaulted, 0);
    }

    #[test]
    fn empty_history_yields_no_points() {
        let out = extract_points(&[], "totals", "co2");
        assert!(out.points.is_empty());
        assert_eq!(out.n_defaulted, 0);
    }
}
