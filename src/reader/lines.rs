//! Line-by-line reading over a buffered file handle.
//!
//! [`LineStream`] is the lazy core: a forward-only, single-pass iterator that
//! holds one line in memory at a time. [`read_lines`] drives it, feeding every
//! line to a handler and also collecting the lines for the caller.

use crate::error::ErrorKind;
use crate::reader::{ensure_readable, ReadResult};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Lazy iterator over the trimmed lines of a file.
///
/// Lines are split on `\n`. Each yielded line has its trailing whitespace
/// removed (which also drops `\r` from CRLF endings); leading whitespace is
/// kept. A final terminator does not produce an extra empty line.
///
/// The underlying file is closed when the stream is dropped. After an I/O
/// error is yielded the stream is finished.
#[derive(Debug)]
pub struct LineStream {
    reader: BufReader<File>,

    /// Raw bytes of the line being read, reused between lines
    buf: Vec<u8>,

    /// Number of lines yielded so far
    lines_read: u64,

    finished: bool,
}

impl LineStream {
    /// Open `path` for streaming after checking that it is a readable file.
    ///
    /// # Errors
    /// Returns the classified cause when the check fails (no handle is opened
    /// in that case) or when opening the handle itself fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ErrorKind> {
        let path = path.as_ref();
        ensure_readable(path)?;
        let file = File::open(path)?;

        Ok(Self::from_reader(BufReader::new(file)))
    }

    fn from_reader(reader: BufReader<File>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            lines_read: 0,
            finished: false,
        }
    }

    /// Number of lines yielded so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line(&self.buf)))
    }
}

impl Iterator for LineStream {
    type Item = Result<String, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_line() {
            Ok(Some(line)) => {
                self.lines_read += 1;
                trace!("line {}: {} bytes", self.lines_read, line.len());
                Some(Ok(line))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(ErrorKind::from(err)))
            }
        }
    }
}

impl FusedIterator for LineStream {}

/// Decode one raw line and strip its terminator and trailing whitespace.
pub fn trim_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim_end().to_owned()
}

/// Open `path` as a [`LineStream`] without collecting anything.
pub fn stream_lines(path: impl AsRef<Path>) -> Result<LineStream, ErrorKind> {
    LineStream::open(path)
}

/// Stream the file at `path`, calling `handler` with each trimmed line in
/// file order, and return all trimmed lines.
///
/// The handler's return value is discarded. The access check runs before any
/// handle is opened; an error in the middle of the stream stops reading and
/// is returned as a failure.
pub fn read_lines<P, F, R>(path: P, mut handler: F) -> ReadResult<Vec<String>>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> R,
{
    let path = path.as_ref();
    debug!("Streaming lines from {}", path.display());

    let stream = match LineStream::open(path) {
        Ok(stream) => stream,
        Err(kind) => {
            debug!("Cannot stream {}: {}", path.display(), kind);
            return ReadResult::Failure(kind);
        }
    };

    let mut lines = Vec::new();
    for line in stream {
        match line {
            Ok(line) => {
                let _ = handler(&line);
                lines.push(line);
            }
            Err(kind) => {
                debug!(
                    "Stream of {} failed after {} lines: {}",
                    path.display(),
                    lines.len(),
                    kind
                );
                return ReadResult::Failure(kind);
            }
        }
    }

    debug!("Streamed {} lines from {}", lines.len(), path.display());
    ReadResult::Success(lines)
}
