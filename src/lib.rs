//! # Wordmill
//!
//! Parallel wordlist extraction from Wiktionary XML dumps, plus a
//! letter/template word search over the extracted lists.
//!
//! ## Features
//!
//! - Streaming, boundary-aligned chunking of unbounded dumps
//! - Parallel heuristic record parsing over a bounded-queue worker pool
//! - Lock-free aggregation into a single deduplicated word table
//! - Dependency-graph validation with cycle detection
//! - Letter/template search ranked by word frequency

pub mod chunk;
pub mod cli;
pub mod emit;
pub mod entry;
pub mod error;
pub mod extract;
pub mod gather;
pub mod parse;
pub mod search;
pub mod util;
pub mod validate;
pub mod wordlist;

pub mod prelude {
    pub use crate::emit::EmitConfig;
    pub use crate::entry::{WordEntry, WordTable};
    pub use crate::error::{Result, WordmillError};
    pub use crate::extract::{ExtractConfig, ExtractStats, Extractor};
    pub use crate::search::{SearchRequest, find_words};
    pub use crate::validate::CyclePolicy;
    pub use crate::wordlist::{FreqTable, WordList};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
