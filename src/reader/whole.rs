//! Whole-file reading: the entire content in one `String`.

use crate::error::ErrorKind;
use crate::reader::{decode_text, ensure_readable, ReadResult};
use log::debug;
use std::fs;
use std::path::Path;

/// Read the complete file at `path` as text and pass it to `handler` once.
///
/// The handler's return value is discarded. On failure the handler is not
/// called and the classified cause is returned.
///
/// # Examples
/// ```no_run
/// use filefeed::reader::read_all;
///
/// let result = read_all("notes.txt", |content| println!("{content}"));
/// assert!(result.is_success());
/// ```
pub fn read_all<P, F, R>(path: P, mut handler: F) -> ReadResult<String>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> R,
{
    let path = path.as_ref();
    debug!("Reading whole file {}", path.display());

    match slurp(path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            let _ = handler(&content);
            ReadResult::Success(content)
        }
        Err(kind) => {
            debug!("Whole-file read of {} failed: {}", path.display(), kind);
            ReadResult::Failure(kind)
        }
    }
}

fn slurp(path: &Path) -> Result<String, ErrorKind> {
    ensure_readable(path)?;
    let bytes = fs::read(path)?;
    Ok(decode_text(bytes))
}
