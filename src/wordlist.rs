//! Loading of extracted word lists and word frequency tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, WordmillError};

/// Word frequency table, keyed on the lower-cased word.
pub type FreqTable = AHashMap<String, u64>;

/// A word list grouped by word length.
///
/// The letter/template search only ever scans one length bucket, so the
/// list is bucketed up front. All words are forced to lower case.
#[derive(Debug, Default)]
pub struct WordList {
    by_len: AHashMap<usize, Vec<String>>,
    total: usize,
}

impl WordList {
    /// Load a word list from a file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            WordmillError::word_list(format!("failed to open {}: {e}", path.display()))
        })?;
        let mut list = WordList::default();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                list.push(word.to_ascii_lowercase());
            }
        }
        Ok(list)
    }

    /// Build a list from an iterator of words; used by tests and callers
    /// that already hold the words in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = WordList::default();
        for word in words {
            list.push(word.into().to_ascii_lowercase());
        }
        list
    }

    fn push(&mut self, word: String) {
        self.by_len.entry(word.len()).or_default().push(word);
        self.total += 1;
    }

    /// All words of the given length.
    pub fn words_of_len(&self, len: usize) -> &[String] {
        self.by_len.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of words across all lengths.
    pub fn len(&self) -> usize {
        self.total
    }

    /// True when the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Load a frequency table from a file of `word count` lines.
///
/// Malformed lines are skipped rather than rejected; frequency tables in
/// the wild are scraped and messy.
pub fn load_freq_table<P: AsRef<Path>>(path: P) -> Result<FreqTable> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| WordmillError::word_list(format!("failed to open {}: {e}", path.display())))?;

    let mut table = FreqTable::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(word), Some(count)) = (fields.next(), fields.next()) else {
            continue;
        };
        if let Ok(count) = count.parse::<u64>() {
            table.insert(word.to_ascii_lowercase(), count);
        }
    }
    Ok(table)
}
