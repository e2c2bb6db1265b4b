//! History file loading.
//!
//! The history file is a JSON array of record objects, typically written by
//! the browser extension as `co2_history.json`. Loading is strict: a missing
//! file, an unreadable file, or malformed JSON aborts the run with exit
//! code 2. There is no partial-read recovery.
//!
//! Parsing is split from file access so tests can feed byte slices directly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::HistoryRecord;
use crate::error::AppError;

/// Load the history JSON from `path`.
pub fn load_history(path: &Path) -> Result<Vec<HistoryRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open history '{}': {e}", path.display())))?;

    parse_history(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid history '{}': {e}", path.display())))
}

/// Parse a history JSON array from any reader.
pub fn parse_history(reader: impl Read) -> Result<Vec<HistoryRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_array_of_records() {
        let json = br#"[
            { "date": "2025-01-01", "totals": { "co2": 10.0 } },
            { "totals": { "co2": 20.5 } },
            { "date": "2025-01-03" }
        ]"#;

        let records = parse_history(&json[..]).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].date.is_some());
        assert!(records[1].date.is_none());
        assert!(records[2].fields.is_empty());
    }

    #[test]
    fn parses_empty_array() {
        let records = parse_history(&b"[]"[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(parse_history(&br#"{ "totals": {} }"#[..]).is_err());
        assert!(parse_history(&b"not json"[..]).is_err());
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let path = PathBuf::from("definitely_missing_co2_history.json");
        let err = load_history(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
