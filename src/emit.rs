//! Final filtering, ordering, and output of validated words.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::entry::WordTable;
use crate::error::Result;

/// Length window applied to emitted words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Minimum word length to emit (inclusive).
    pub min_len: usize,

    /// Maximum word length to emit (inclusive); 0 means unbounded.
    pub max_len: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            min_len: 3,
            max_len: 0,
        }
    }
}

impl EmitConfig {
    fn accepts(&self, word: &str) -> bool {
        word.len() >= self.min_len && (self.max_len == 0 || word.len() <= self.max_len)
    }
}

/// Collect valid words within the length window, ascending lexicographic.
pub fn collect_words(table: &WordTable, config: &EmitConfig) -> Vec<String> {
    let mut words: Vec<String> = table
        .iter()
        .filter(|e| e.valid && config.accepts(&e.word))
        .map(|e| e.word.clone())
        .collect();
    words.sort_unstable();
    words
}

/// Write the final word list, one word per line.
///
/// Returns the number of words emitted.
pub fn emit_words<W: Write>(table: &WordTable, config: &EmitConfig, mut out: W) -> Result<usize> {
    let words = collect_words(table, config);
    for word in &words {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(words.len())
}
