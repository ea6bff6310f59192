//! Pre-read access check shared by both reading strategies.

use crate::error::ErrorKind;
use std::fs;
use std::path::Path;

/// Check that `path` exists and can be read as a file, before any handle is
/// opened.
///
/// # Error Cases
/// - Path does not exist (`NotFound`)
/// - A parent component is a regular file (`NotADirectory`)
/// - Metadata is not readable (`PermissionDenied`)
/// - Path points to a directory (`IsADirectory`)
///
/// Directories are rejected here so both readers classify them the same way
/// on every platform, instead of depending on whether the OS lets a
/// directory handle be opened.
pub fn ensure_readable(path: &Path) -> Result<(), ErrorKind> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(ErrorKind::IsADirectory);
    }

    Ok(())
}
