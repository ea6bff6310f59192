//! filefeed - read a text file whole and line by line.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Logging goes to stderr, controlled by RUST_LOG
    env_logger::init();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let status = filefeed::app::run(std::env::args_os().skip(1), &mut out, &mut err)
        .context("filefeed could not write its output")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(status.into())
}
