//! Application orchestration layer
//!
//! Turns a parsed command line into output and an exit status. This is the
//! only place where a read failure becomes process behaviour: readers report
//! failures as values, and [`run`] decides what gets printed and which
//! [`ExitStatus`] the binary ends with.

use crate::cli::{self, ParsedCommand};
use crate::error::{FileFeedError, Result};
use crate::reader::{read_all, read_lines};
use crate::VERSION;
use log::{debug, info};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

mod echo;

use echo::Echo;

/// Marker printed after the whole-file pass
pub const WHOLE_FILE_DONE: &str = "--- whole-file read complete";

/// Marker printed after the line-by-line pass
pub const LINES_DONE: &str = "--- line-by-line read complete";

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything requested was done, including help and version output
    Success,
    /// A read failed and an error line was written
    ReadError,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ReadError => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Parse `args` (without the program name) and execute the command.
///
/// Regular output goes to `out`, read errors to `err`. A read failure is
/// reported and turned into [`ExitStatus::ReadError`]; only failures of the
/// writers themselves come back as `Err`.
pub fn run<I, T, W, E>(args: I, out: &mut W, err: &mut E) -> Result<ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
    E: Write,
{
    let command = cli::parse(args);
    debug!("Dispatching {:?}", command);

    match command {
        ParsedCommand::ShowHelp => {
            writeln!(out, "{}", cli::help_text().trim_end())?;
            Ok(ExitStatus::Success)
        }
        ParsedCommand::ShowVersion => {
            writeln!(out, "filefeed {VERSION}")?;
            Ok(ExitStatus::Success)
        }
        ParsedCommand::ProcessFile(path) => match process_file(&path, out) {
            Ok(()) => Ok(ExitStatus::Success),
            Err(read_err @ FileFeedError::Read { .. }) => {
                info!("{read_err}");
                writeln!(err, "{read_err}")?;
                Ok(ExitStatus::ReadError)
            }
            Err(other) => Err(other),
        },
    }
}

/// Run both strategies over `path`, echoing content to `out`.
///
/// Stops at the first failing read; the line pass never starts when the
/// whole-file pass failed.
pub fn process_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let mut echo = Echo::new(&mut *out);
    let content = read_all(path, |content| {
        for line in content.lines() {
            echo.line(line);
        }
    })
    .into_result(path)?;
    echo.finish()?;
    writeln!(out, "{WHOLE_FILE_DONE} ({} bytes) ---", content.len())?;

    let mut echo = Echo::new(&mut *out);
    let lines = read_lines(path, |line| echo.line(line)).into_result(path)?;
    echo.finish()?;
    writeln!(out, "{LINES_DONE} ({} lines) ---", lines.len())?;

    Ok(())
}
