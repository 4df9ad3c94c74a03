//! Heuristic record parsing.
//!
//! Each worker owns one [`RecordParser`] and feeds it boundary-aligned
//! chunks. The parser deliberately trades recall for speed: records are
//! fielded with literal tag splits and regex predicates rather than a real
//! XML parser, and any record that fails a step is silently dropped.

use std::str;

use regex::Regex;
use regex::bytes::Regex as BytesRegex;

use crate::chunk::DEFAULT_BOUNDARY;
use crate::entry::WordEntry;
use crate::error::{Result, WordmillError};
use crate::util;

/// Configuration for [`RecordParser`].
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Accept keys containing upper-case letters. Accepted mixed-case keys
    /// are folded to lower case before use as table identity. When false,
    /// only all-lower-case keys pass the shape filter.
    pub mixed_case: bool,
}

/// Extracts word entries from raw record bytes.
pub struct RecordParser {
    mixed_case: bool,
    rx_valid_word: Regex,
    rx_english: BytesRegex,
    rx_ignore: BytesRegex,
    rx_dep: BytesRegex,
    rx_dep_word: BytesRegex,
}

impl RecordParser {
    /// Compile the pattern set for one worker.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let shape = if config.mixed_case {
            r"^[a-zA-Z]+$"
        } else {
            r"^[a-z]+$"
        };

        Ok(RecordParser {
            mixed_case: config.mixed_case,
            rx_valid_word: compile(shape)?,
            // Only English entries are interesting for this list.
            rx_english: compile_bytes(r"==English==|Category:(en[^a-z]|English)")?,
            // Entries that only exist as cross-references.
            rx_ignore: compile_bytes(
                r"(initialism|archaic spelling) of\|[^|]+\|lang=en|surname\|lang=en[^a-z]",
            )?,
            // A "derived form of X" template; X becomes a dependency.
            rx_dep: compile_bytes(r"\{\{plural of.*\|lang=en[^a-z].*?\}\}")?,
            rx_dep_word: compile_bytes(r"\|(\w+)(\||\}\})")?,
        })
    }

    /// Parse every record in a boundary-aligned chunk.
    pub fn parse_block(&self, block: &[u8]) -> Vec<WordEntry> {
        util::split_after(block, DEFAULT_BOUNDARY)
            .filter_map(|record| self.parse_record(record))
            .collect()
    }

    /// Parse one record into at most one entry.
    ///
    /// The word is the `<title>` of the record; the body searched for the
    /// language and dependency markers is the `<text>` of the most recent
    /// `<revision>`. A failure at any step drops the record.
    pub fn parse_record(&self, record: &[u8]) -> Option<WordEntry> {
        let (_, rest) = util::split_once(record, b"<title>")?;
        let (title, _) = util::split_once(rest, b"</title>")?;
        let title = str::from_utf8(title).ok()?;

        if !self.rx_valid_word.is_match(title) {
            return None;
        }
        let word = if self.mixed_case {
            title.to_ascii_lowercase()
        } else {
            title.to_string()
        };

        // Only the last revision holds current text; earlier ones are
        // history. A record without a revision marker is searched whole.
        let tail = match util::rfind(record, b"<revision>") {
            Some(at) => &record[at + b"<revision>".len()..],
            None => record,
        };
        let (_, rest) = util::split_once(tail, b"<text")?;
        let (body, _) = util::split_once(rest, b"</text>")?;

        if !self.rx_english.is_match(body) {
            return None;
        }
        if self.rx_ignore.is_match(body) {
            return None;
        }

        let mut entry = WordEntry::new(word);

        if let Some(found) = self.rx_dep.find(body) {
            let caps = self.rx_dep_word.captures(found.as_bytes())?;
            let dep = str::from_utf8(caps.get(1)?.as_bytes()).ok()?;

            // A word must never depend on itself.
            if !entry.word.eq_ignore_ascii_case(dep) {
                entry.add_dep(dep);
            }
        }

        Some(entry)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| WordmillError::parse(format!("bad pattern '{pattern}': {e}")))
}

fn compile_bytes(pattern: &str) -> Result<BytesRegex> {
    BytesRegex::new(pattern)
        .map_err(|e| WordmillError::parse(format!("bad pattern '{pattern}': {e}")))
}
