//! Command implementations for the wordmill CLI.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::error::Result;
use crate::extract::{ExtractConfig, Extractor};
use crate::search::{SearchRequest, find_words};
use crate::validate::CyclePolicy;
use crate::wordlist::{FreqTable, WordList, load_freq_table};

/// Execute a CLI command.
pub fn execute_command(args: WordmillArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => run_extract(extract_args.clone()),
        Command::Search(search_args) => run_search(search_args.clone()),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let config = ExtractConfig {
        min_len: args.min_length,
        max_len: args.max_length,
        mixed_case: args.mixed_case,
        workers: args.workers,
        queue_capacity: args.queue_capacity,
        max_buffer: args.max_buffer_size,
        cycle_policy: if args.reject_cycles {
            CyclePolicy::Reject
        } else {
            CyclePolicy::Accept
        },
        ..ExtractConfig::default()
    };

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let start = Instant::now();
    let stats = Extractor::new(config).run(reader, writer)?;
    info!(
        "extracted {} of {} words from {} chunks in {:.2?}",
        stats.words_emitted,
        stats.words_total,
        stats.chunks,
        start.elapsed()
    );

    Ok(())
}

fn run_search(args: SearchArgs) -> Result<()> {
    let start = Instant::now();
    let list = WordList::load(&args.wordlist)?;
    let freqs = match &args.freq_list {
        Some(path) => load_freq_table(path)?,
        None => FreqTable::new(),
    };
    info!("loaded {} words in {:.2?}", list.len(), start.elapsed());

    let request = SearchRequest {
        letters: args.letters.clone(),
        template: args.template.clone(),
    };

    let start = Instant::now();
    let words = find_words(&list, &freqs, &request)?;
    info!("found {} words in {:.2?}", words.len(), start.elapsed());

    let mut out = BufWriter::new(io::stdout().lock());
    match args.format {
        OutputFormat::Human => {
            for word in &words {
                writeln!(out, "{word}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &words)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
