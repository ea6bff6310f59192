//! Error types and handling infrastructure for filefeed.
//!
//! Two layers live here:
//!
//! - [`ErrorKind`] classifies a failed file access. Readers return it inside
//!   [`ReadResult::Failure`](crate::reader::ReadResult) instead of raising it.
//! - [`FileFeedError`] is the crate-level error built with `thiserror`, used
//!   where a failure has to travel through `?` (runner output, promoted read
//!   failures).

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Classification of a file-access failure, derived from the OS error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The path does not exist
    NotFound,
    /// The process lacks permission to read the path
    PermissionDenied,
    /// The path names a directory where a file was expected
    IsADirectory,
    /// A path component that should be a directory is not one
    NotADirectory,
    /// The allocator could not satisfy the read
    OutOfMemory,
    /// Anything else, with the raw OS code when one was reported
    Other { code: Option<i32>, detail: String },
}

impl ErrorKind {
    /// Short human phrase used in user-facing error lines.
    pub fn phrase(&self) -> String {
        match self {
            Self::NotFound => "file not found".to_string(),
            Self::PermissionDenied => "permission denied".to_string(),
            Self::IsADirectory => "is a directory".to_string(),
            Self::NotADirectory => "not a directory".to_string(),
            Self::OutOfMemory => "not enough memory".to_string(),
            Self::Other {
                code: Some(code),
                detail,
            } => format!("error code {code}: {detail}"),
            Self::Other { code: None, detail } => format!("unknown error: {detail}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl From<&io::Error> for ErrorKind {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::IsADirectory => Self::IsADirectory,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            io::ErrorKind::OutOfMemory => Self::OutOfMemory,
            _ => Self::Other {
                code: err.raw_os_error(),
                detail: err.to_string(),
            },
        }
    }
}

impl From<io::Error> for ErrorKind {
    fn from(err: io::Error) -> Self {
        Self::from(&err)
    }
}

/// The main error type for filefeed operations.
#[derive(Error, Debug)]
pub enum FileFeedError {
    /// A read failed with a classified cause
    #[error("Error reading file '{}': {kind}", path.display())]
    Read { path: PathBuf, kind: ErrorKind },

    /// Writing to stdout or stderr failed
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

/// Standard Result type for filefeed operations.
pub type Result<T> = std::result::Result<T, FileFeedError>;

impl FileFeedError {
    /// Create a Read error for `path` with a classified cause
    pub fn read(path: impl Into<PathBuf>, kind: ErrorKind) -> Self {
        Self::Read {
            path: path.into(),
            kind,
        }
    }
}

// Writer failures are the only io::Error that reaches `?` unclassified.
impl From<io::Error> for FileFeedError {
    fn from(source: io::Error) -> Self {
        Self::Output { source }
    }
}
