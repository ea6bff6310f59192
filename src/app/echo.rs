//! Line echo used as the read handler.
//!
//! Read handlers cannot return errors, so the echo keeps the first write
//! failure, stops writing after it, and hands it back from [`Echo::finish`].

use std::io::{self, Write};

pub(crate) struct Echo<'a, W: Write> {
    out: &'a mut W,
    failed: Option<io::Error>,
}

impl<'a, W: Write> Echo<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Self { out, failed: None }
    }

    /// Write `line` followed by a newline.
    pub(crate) fn line(&mut self, line: &str) {
        if self.failed.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.failed = Some(err);
        }
    }

    pub(crate) fn finish(self) -> io::Result<()> {
        match self.failed {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
