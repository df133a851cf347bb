//! Input discovery, parsing and record validation errors

use super::MergeError;

/// Creates an input not found error
pub fn not_found(kind: impl Into<String>, path: impl Into<String>) -> MergeError {
    MergeError::InputNotFound {
        kind: kind.into(),
        path: path.into(),
    }
}

/// Creates an ambiguous input error from the matching candidates
pub fn ambiguous<S: AsRef<str>>(kind: impl Into<String>, candidates: &[S]) -> MergeError {
    let candidates = candidates
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    MergeError::AmbiguousInput {
        kind: kind.into(),
        candidates,
    }
}

pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a JSON syntax error for an input file
pub fn json_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::JsonParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a record validation error (missing field, wrong type)
pub fn invalid_record(path: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::InvalidRecord {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn serialize_failed(reason: impl Into<String>) -> MergeError {
    MergeError::SerializeFailed {
        reason: reason.into(),
    }
}
