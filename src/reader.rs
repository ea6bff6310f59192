//! File reading strategies behind a uniform success/failure result.
//!
//! Two ways to consume a text file are provided:
//!
//! - [`read_all`] slurps the whole file into one `String`
//! - [`read_lines`] streams the file one trimmed line at a time
//!
//! Both hand the content to a caller-supplied handler and report the outcome
//! as a [`ReadResult`]. Failures are values, never panics. Callers that want
//! constant-memory streaming without the accumulated `Vec` use
//! [`stream_lines`] and drive the [`LineStream`] iterator themselves.

use crate::error::{ErrorKind, FileFeedError};
use std::path::Path;

pub mod lines;
pub mod validation;
pub mod whole;

pub use lines::{read_lines, stream_lines, LineStream};
pub use validation::ensure_readable;
pub use whole::read_all;

/// Outcome of a read: the payload, or the classified reason it failed.
///
/// A failure never carries a payload.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult<T> {
    Success(T),
    Failure(ErrorKind),
}

impl<T> ReadResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The payload, if the read succeeded
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure classification, if the read failed
    pub fn failure(&self) -> Option<&ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(kind) => Some(kind),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadResult<U> {
        match self {
            Self::Success(value) => ReadResult::Success(f(value)),
            Self::Failure(kind) => ReadResult::Failure(kind),
        }
    }

    /// Promote a failure to a crate error naming `path`, for use with `?`.
    pub fn into_result(self, path: impl AsRef<Path>) -> crate::Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(kind) => Err(FileFeedError::read(path.as_ref(), kind)),
        }
    }
}

impl<T> From<Result<T, ErrorKind>> for ReadResult<T> {
    fn from(result: Result<T, ErrorKind>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(kind) => Self::Failure(kind),
        }
    }
}

impl<T> From<ReadResult<T>> for Result<T, ErrorKind> {
    fn from(result: ReadResult<T>) -> Self {
        match result {
            ReadResult::Success(value) => Ok(value),
            ReadResult::Failure(kind) => Err(kind),
        }
    }
}

/// Decode file bytes as text, replacing invalid UTF-8 sequences with U+FFFD.
pub(crate) fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
