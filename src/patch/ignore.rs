//! Idempotent ignore-list update

use std::io::Write;
use std::path::Path;

use crate::error::{Result, fs};

/// Comment written above the appended entry
pub const ENTRY_COMMENT: &str = "# Certificate directory";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreOutcome {
    /// There is no ignore file; none is created
    FileMissing,
    /// The entry text already occurs somewhere in the file
    AlreadyPresent,
    Appended,
}

/// Append `entry` to the ignore file at `path` unless the file already mentions it.
///
/// The check is a plain substring search, so `entry` inside a longer pattern counts as present.
pub fn ensure_entry(path: &Path, entry: &str) -> Result<IgnoreOutcome> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no ignore file");
        return Ok(IgnoreOutcome::FileMissing);
    }

    let content = std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, &e))?;
    if content.contains(entry) {
        return Ok(IgnoreOutcome::AlreadyPresent);
    }

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| fs::write_failed(path, &e))?;
    write!(file, "\n{ENTRY_COMMENT}\n{entry}\n").map_err(|e| fs::write_failed(path, &e))?;

    tracing::debug!(path = %path.display(), entry, "appended ignore entry");
    Ok(IgnoreOutcome::Appended)
}
