//! Shared utilities.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{NavigatorError, Result};

/// Atomically write content to a file.
///
/// Writes to a temporary file in the target's directory, flushes it, then
/// renames it over the target. If any step fails the original file (if one
/// exists) is left unchanged. The parent directory is created when missing.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = path.parent().ok_or_else(|| NavigatorError::IoError {
        context: format!("Cannot determine parent directory for: {}", path.display()),
        source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
    })?;

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            NavigatorError::io(format!("Failed to create directory: {}", parent.display()), e)
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        NavigatorError::io(
            format!("Failed to create temporary file in: {}", parent.display()),
            e,
        )
    })?;

    temp_file.write_all(content).map_err(|e| {
        NavigatorError::io(format!("Failed to write temporary file for: {}", path.display()), e)
    })?;

    temp_file.flush().map_err(|e| {
        NavigatorError::io(format!("Failed to flush temporary file for: {}", path.display()), e)
    })?;

    temp_file.persist(path).map_err(|e| {
        NavigatorError::io(format!("Failed to atomically write file: {}", path.display()), e.error)
    })?;

    Ok(())
}
