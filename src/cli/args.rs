//! Command line argument parsing for the wordmill CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Wordmill - wordlist extraction and search
#[derive(Parser, Debug, Clone)]
#[command(name = "wordmill")]
#[command(about = "Extract a wordlist from a Wiktionary XML dump and search it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordmillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordmillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a wordlist from a Wiktionary XML dump on stdin
    Extract(ExtractArgs),

    /// Search a wordlist for words matching a template and letter set
    Search(SearchArgs),
}

/// Arguments for the extract command
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Minimum length word to output
    #[arg(short = 'm', long = "min-length", default_value_t = 3)]
    pub min_length: usize,

    /// Maximum length word to output (0 = unbounded)
    #[arg(short = 'l', long = "max-length", default_value_t = 7)]
    pub max_length: usize,

    /// Include words with upper case letters
    #[arg(short = 'i', long = "mixed-case")]
    pub mixed_case: bool,

    /// Number of parsing workers (defaults to the number of CPU cores)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Chunk queue capacity (defaults to twice the worker count)
    #[arg(long, value_name = "N")]
    pub queue_capacity: Option<usize>,

    /// Maximum read buffer size in bytes while searching for a record
    /// boundary
    #[arg(long, value_name = "BYTES", default_value_t = 100 * 1024 * 1024)]
    pub max_buffer_size: usize,

    /// Read the dump from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Do not credit dependency cycles as valid
    #[arg(long)]
    pub reject_cycles: bool,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Read wordlist from FILE, one word per line
    #[arg(short = 'w', long, value_name = "FILE", env = "WORDMILL_WORDLIST")]
    pub wordlist: PathBuf,

    /// Read word frequencies from FILE, 'word count' per line
    #[arg(short = 'f', long = "freq-list", value_name = "FILE")]
    pub freq_list: Option<PathBuf>,

    /// Template to search for, non-alpha for any letter, ex: 'a...' to find
    /// all four letter words that start with 'a'
    #[arg(short = 't', long)]
    pub template: String,

    /// Available letters to use to make words, ex: 'ebsls' might be used to
    /// make the word 'bless'
    #[arg(short = 'l', long)]
    pub letters: String,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One word per line
    Human,
    /// A JSON array of words
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = WordmillArgs::try_parse_from(["wordmill", "extract"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WordmillArgs::try_parse_from(["wordmill", "-vv", "extract"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WordmillArgs::try_parse_from(["wordmill", "-q", "-v", "extract"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_extract_defaults() {
        let args = WordmillArgs::try_parse_from(["wordmill", "extract"]).unwrap();
        let Command::Extract(extract) = args.command else {
            panic!("expected extract command");
        };
        assert_eq!(extract.min_length, 3);
        assert_eq!(extract.max_length, 7);
        assert!(!extract.mixed_case);
        assert!(extract.workers.is_none());
        assert!(!extract.reject_cycles);
    }

    #[test]
    fn test_search_args() {
        let args = WordmillArgs::try_parse_from([
            "wordmill", "search", "-w", "words.txt", "-t", "b....", "-l", "ebsls",
        ])
        .unwrap();
        let Command::Search(search) = args.command else {
            panic!("expected search command");
        };
        assert_eq!(search.wordlist, PathBuf::from("words.txt"));
        assert_eq!(search.template, "b....");
        assert_eq!(search.letters, "ebsls");
        assert_eq!(search.format, OutputFormat::Human);
    }
}
