//! Locate export files in an input directory
//!
//! With a dataset tag the exact name `<prefix> (<tag>).json` is used.
//! Without one, the directory is scanned for `<prefix> (*).json` and exactly
//! one file must match.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wax::{CandidatePath, Glob, Pattern};

use super::InputKind;
use crate::error::{
    MergeError, Result, ambiguous_input, file_read_failed, input_not_found, invalid_pattern,
};

/// Glob matching any tag for `kind`; parentheses are wax metacharacters
pub fn pattern_for(kind: InputKind) -> String {
    format!("{} \\(*\\).json", kind.prefix())
}

/// File names in `dir` matching `kind`, sorted
pub fn find_candidates(dir: &Path, kind: InputKind) -> Result<Vec<String>> {
    let pattern = pattern_for(kind);
    let glob = Glob::new(&pattern).map_err(|e| invalid_pattern(&pattern, e.to_string()))?;

    let entries = fs::read_dir(dir)
        .map_err(|e| file_read_failed(dir.display().to_string(), e.to_string()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| file_read_failed(dir.display().to_string(), e.to_string()))?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let candidate = CandidatePath::from(name);
        if glob.matched(&candidate).is_some() {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Locate a required input file
pub fn locate(dir: &Path, kind: InputKind, tag: Option<&str>) -> Result<PathBuf> {
    if let Some(tag) = tag {
        let path = dir.join(kind.file_name(tag));
        if !path.is_file() {
            return Err(input_not_found(kind.to_string(), path.display().to_string()));
        }
        return Ok(path);
    }

    let not_found = || {
        let pattern = dir.join(pattern_label(kind));
        input_not_found(kind.to_string(), pattern.display().to_string())
    };
    if !dir.is_dir() {
        return Err(not_found());
    }

    let candidates = find_candidates(dir, kind)?;
    match candidates.as_slice() {
        [] => Err(not_found()),
        [name] => {
            debug!(%kind, file = %name, "Discovered input");
            Ok(dir.join(name))
        }
        _ => Err(ambiguous_input(kind.to_string(), &candidates)),
    }
}

/// Locate an input that may legitimately be absent
pub fn locate_optional(dir: &Path, kind: InputKind, tag: Option<&str>) -> Option<PathBuf> {
    match locate(dir, kind, tag) {
        Ok(path) => Some(path),
        Err(e) => {
            if matches!(e, MergeError::AmbiguousInput { .. }) {
                warn!("Ignoring {} file: {}", kind, e);
            }
            None
        }
    }
}

/// Human-readable form of the discovery pattern, without glob escapes
fn pattern_label(kind: InputKind) -> String {
    kind.file_name("*")
}
