//! Output writing for merged records
//!
//! This module handles:
//! - Serializing records as indented JSON
//! - Ensuring the parent directory exists before writing
//! - Replacing the destination through a temporary file in the same directory
//!
//! The temporary file is created with the same mode a plain write would give:
//! the existing destination's permissions when it is replaced, otherwise
//! `0o666` filtered by the process umask.

use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::info;

use crate::domain::OutputRecord;
use crate::error::{Result, file_write_failed, io_error, serialize_failed};

/// Serialize records as 2-space indented JSON with a trailing newline
pub fn to_json(records: &[OutputRecord]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(records).map_err(|e| serialize_failed(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Write records to `target`
pub fn write_records(records: &[OutputRecord], target: &Path) -> Result<()> {
    let json = to_json(records)?;
    let display = target.display().to_string();

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| file_write_failed(&display, e.to_string()))?;

    let mut temp = create_temp(dir)?;
    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| file_write_failed(&display, e.to_string()))?;
    }
    temp.write_all(json.as_bytes())
        .map_err(|e| file_write_failed(&display, e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| file_write_failed(&display, e.to_string()))?;
    temp.persist(target)
        .map_err(|e| file_write_failed(&display, e.error.to_string()))?;

    info!(
        path = %target.display(),
        records = records.len(),
        bytes = json.len(),
        "Wrote output"
    );
    Ok(())
}

fn create_temp(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".evalmerge-").suffix(".json.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Filtered by the umask at creation, like a plain create
        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir).map_err(|e| {
        io_error(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })
}
