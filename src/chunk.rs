//! Boundary-aligned chunking of an unbounded byte stream.
//!
//! The splitter reads the dump incrementally and emits self-contained
//! chunks, each ending exactly at the last record boundary found in the
//! read buffer. A chunk therefore holds one or more whole records and can
//! be parsed by a worker without seeing any other chunk.

use std::io::Read;

use log::warn;

use crate::error::{Result, WordmillError};
use crate::util;

/// Default record boundary marker.
pub const DEFAULT_BOUNDARY: &[u8] = b"</page>";

/// Configuration for [`ChunkSplitter`].
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Literal byte sequence closing one record.
    pub boundary: Vec<u8>,

    /// How many bytes to request from the reader per growth step.
    pub read_size: usize,

    /// Maximum buffered bytes while searching for a boundary. A run of
    /// input longer than this without a boundary occurrence is fatal.
    pub max_buffer: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        SplitterConfig {
            boundary: DEFAULT_BOUNDARY.to_vec(),
            read_size: 1024 * 1024,
            max_buffer: 100 * 1024 * 1024,
        }
    }
}

/// Splits a byte stream into chunks aligned on record boundaries.
pub struct ChunkSplitter<R: Read> {
    reader: R,
    config: SplitterConfig,
    buf: Vec<u8>,
    eof: bool,
}

impl<R: Read> ChunkSplitter<R> {
    /// Create a splitter over `reader`.
    pub fn new(reader: R, config: SplitterConfig) -> Self {
        ChunkSplitter {
            reader,
            config,
            buf: Vec::new(),
            eof: false,
        }
    }

    /// Produce the next boundary-aligned chunk, or `None` at end of input.
    ///
    /// The chunk is the longest buffered prefix ending at the last boundary
    /// occurrence. Bytes remaining after the final boundary at end of input
    /// form an incomplete trailing record and are dropped with a warning.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        if self.config.boundary.is_empty() {
            return Err(WordmillError::split(
                "record boundary marker must not be empty",
            ));
        }

        loop {
            if let Some(at) = util::rfind(&self.buf, &self.config.boundary) {
                let rest = self.buf.split_off(at + self.config.boundary.len());
                let chunk = std::mem::replace(&mut self.buf, rest);
                return Ok(Some(chunk));
            }

            if self.eof {
                if !self.buf.is_empty() {
                    warn!(
                        "discarding {} trailing bytes with no record boundary",
                        self.buf.len()
                    );
                    self.buf.clear();
                }
                return Ok(None);
            }

            if self.buf.len() >= self.config.max_buffer {
                return Err(WordmillError::resource_exhausted(format!(
                    "no record boundary within {} buffered bytes",
                    self.buf.len()
                )));
            }

            let start = self.buf.len();
            let step = self
                .config
                .read_size
                .min(self.config.max_buffer - start)
                .max(1);
            self.buf.resize(start + step, 0);
            let n = self.reader.read(&mut self.buf[start..])?;
            self.buf.truncate(start + n);
            if n == 0 {
                self.eof = true;
            }
        }
    }
}

impl<R: Read> Iterator for ChunkSplitter<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Result<Vec<u8>>> {
        self.next_chunk().transpose()
    }
}
