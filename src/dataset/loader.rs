//! Read and validate one input file
//!
//! The file is read fully into memory and parsed in two steps: first as a
//! JSON array, then record by record into the typed struct. Syntax problems
//! surface as [`MergeError::JsonParseFailed`], schema problems as
//! [`MergeError::InvalidRecord`] naming the offending record index.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::error::Category;
use tracing::debug;

use crate::error::{
    MergeError, Result, file_read_failed, input_not_found, invalid_record, json_parse_failed,
};

/// Load a JSON array of records from `path`
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => input_not_found("input", &display),
        _ => file_read_failed(&display, e.to_string()),
    })?;

    let records = parse_records(&content).map_err(|e| e.with_path(&display))?;
    debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Parse failure, before the file path is attached
#[derive(Debug)]
pub enum ParseError {
    Syntax(String),
    Record(String),
}

impl ParseError {
    fn with_path(self, path: &str) -> MergeError {
        match self {
            ParseError::Syntax(reason) => json_parse_failed(path, reason),
            ParseError::Record(reason) => invalid_record(path, reason),
        }
    }
}

/// Parse a JSON array of records from a string
pub fn parse_records<T: DeserializeOwned>(
    content: &str,
) -> std::result::Result<Vec<T>, ParseError> {
    // Strip a UTF-8 byte order mark, some exporters write one
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let values: Vec<Value> = serde_json::from_str(content).map_err(|e| match e.classify() {
        Category::Data => ParseError::Record(format!("expected an array of records: {}", e)),
        Category::Io | Category::Syntax | Category::Eof => ParseError::Syntax(e.to_string()),
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .map_err(|e| ParseError::Record(format!("record {}: {}", index, e)))
        })
        .collect()
}
