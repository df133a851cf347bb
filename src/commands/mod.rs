//! Command implementations for evalmerge CLI

pub mod completions;
pub mod merge;
pub mod version;
