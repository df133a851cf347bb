//! Error types and handling for evalmerge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Input discovery and record validation errors
//! - [`config`]: Configuration file errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod input;

pub use config::{
    not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use input::{
    ambiguous as ambiguous_input, invalid_pattern, invalid_record, json_parse_failed,
    not_found as input_not_found, serialize_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for evalmerge operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    // Input errors
    #[error("No {kind} file found: {path}")]
    #[diagnostic(
        code(evalmerge::input::not_found),
        help("Pass --indir pointing at the export directory, or give the file path explicitly")
    )]
    InputNotFound { kind: String, path: String },

    #[error("Ambiguous {kind} input: {candidates}")]
    #[diagnostic(
        code(evalmerge::input::ambiguous),
        help("Pass --dataset <tag> to pick one export, e.g. --dataset eng_dapie")
    )]
    AmbiguousInput { kind: String, candidates: String },

    #[error("Invalid input pattern '{pattern}': {reason}")]
    #[diagnostic(code(evalmerge::input::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to parse JSON in {path}: {reason}")]
    #[diagnostic(code(evalmerge::input::parse_failed))]
    JsonParseFailed { path: String, reason: String },

    #[error("Invalid record in {path}: {reason}")]
    #[diagnostic(
        code(evalmerge::input::invalid_record),
        help("Every record must carry its required fields, even when their value is null")
    )]
    InvalidRecord { path: String, reason: String },

    // Output errors
    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(evalmerge::output::serialize_failed))]
    SerializeFailed { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(evalmerge::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(evalmerge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(evalmerge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(evalmerge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(evalmerge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(evalmerge::fs::io_error))]
    IoError { message: String },
}

impl From<serde_yaml::Error> for MergeError {
    fn from(err: serde_yaml::Error) -> Self {
        MergeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
