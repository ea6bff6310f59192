//! # filefeed - Whole-File and Line-Stream Text Reader
//!
//! Reads a text file either in one piece or line by line and forwards the
//! content to a caller-supplied handler, reporting the outcome as a tagged
//! [`ReadResult`] instead of panicking.
//!
//! ## Architecture
//!
//! - [`error`] - Failure classification and the crate error type
//! - [`reader`] - The two reading strategies and their result type
//! - [`cli`] - Argument parsing into a [`cli::ParsedCommand`]
//! - [`app`] - Dispatch, user-facing output and exit status
//!
//! ## Example
//!
//! ```no_run
//! use filefeed::{read_lines, ReadResult};
//!
//! match read_lines("app.log", |line| println!("{line}")) {
//!     ReadResult::Success(lines) => eprintln!("{} lines", lines.len()),
//!     ReadResult::Failure(kind) => eprintln!("cannot read app.log: {kind}"),
//! }
//! ```

// Core modules
pub mod error;
pub mod reader;

// Command line surface
pub mod app;
pub mod cli;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, FileFeedError, Result};
pub use reader::{read_all, read_lines, stream_lines, LineStream, ReadResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
