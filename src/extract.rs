//! The extraction pipeline.
//!
//! Wires the splitter, the parsing worker pool, and the aggregator together
//! with bounded channels:
//!
//! ```text
//! reader -> ChunkSplitter -> chunk queue -> worker pool -> entry queue
//!        -> aggregator -> WordTable -> validator -> emitter -> writer
//! ```
//!
//! The bounded queues are the only synchronization in the pipeline; a full
//! queue blocks the producer side all the way back to input reading, an
//! empty queue blocks consumers. There are no locks on the table: it has
//! exactly one writer at every phase.

use std::io::{Read, Write};
use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkSplitter, SplitterConfig};
use crate::emit::{EmitConfig, emit_words};
use crate::entry::{WordEntry, WordTable};
use crate::error::{Result, WordmillError};
use crate::gather::gather_entries;
use crate::parse::{ParserConfig, RecordParser};
use crate::validate::{CyclePolicy, validate_table};

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Minimum word length to emit (inclusive).
    pub min_len: usize,

    /// Maximum word length to emit (inclusive); 0 means unbounded.
    pub max_len: usize,

    /// Accept mixed-case titles (folded to lower case).
    pub mixed_case: bool,

    /// Worker pool size. If None, uses the number of CPU cores.
    pub workers: Option<usize>,

    /// Chunk queue capacity. If None, twice the worker count.
    pub queue_capacity: Option<usize>,

    /// Bytes requested from the reader per splitter growth step.
    pub read_size: usize,

    /// Maximum splitter buffer size; exceeding it aborts the run.
    pub max_buffer: usize,

    /// How dependency cycles are resolved during validation.
    pub cycle_policy: CyclePolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            min_len: 3,
            max_len: 0,
            mixed_case: false,
            workers: None,
            queue_capacity: None,
            read_size: 1024 * 1024,
            max_buffer: 100 * 1024 * 1024,
            cycle_policy: CyclePolicy::default(),
        }
    }
}

/// Counters reported by a completed extraction run.
#[derive(Debug, Clone)]
pub struct ExtractStats {
    /// Boundary-aligned chunks handed to the worker pool.
    pub chunks: usize,

    /// Distinct words in the final table.
    pub words_total: usize,

    /// Words that passed validation and the length window.
    pub words_emitted: usize,
}

/// Runs the whole dump-to-wordlist pipeline.
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ExtractConfig) -> Self {
        Extractor { config }
    }

    /// Access the extractor configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Consume `reader` and write the sorted word list to `writer`.
    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<ExtractStats> {
        let workers = self.config.workers.unwrap_or_else(num_cpus::get).max(1);
        let queue_capacity = self.config.queue_capacity.unwrap_or(workers * 2).max(1);

        let parser = RecordParser::new(&ParserConfig {
            mixed_case: self.config.mixed_case,
        })?;
        let splitter_config = SplitterConfig {
            read_size: self.config.read_size,
            max_buffer: self.config.max_buffer,
            ..SplitterConfig::default()
        };

        debug!("starting extraction with {workers} workers, chunk queue of {queue_capacity}");

        let (chunk_tx, chunk_rx) = bounded::<Option<Vec<u8>>>(queue_capacity);
        let (entry_tx, entry_rx) = bounded::<Option<WordEntry>>(workers);

        let (mut table, chunks) = thread::scope(|scope| -> Result<(WordTable, usize)> {
            for _ in 0..workers {
                let chunk_rx = chunk_rx.clone();
                let entry_tx = entry_tx.clone();
                let parser = &parser;
                scope.spawn(move || worker_loop(&chunk_rx, &entry_tx, parser));
            }
            // Workers hold their own clones; the aggregator must observe
            // disconnect if every worker dies.
            drop(entry_tx);
            drop(chunk_rx);

            let aggregator = scope.spawn(move || gather_entries(&entry_rx, workers));

            // Split on this thread; a full chunk queue blocks the read loop,
            // propagating backpressure to the input.
            let mut splitter = ChunkSplitter::new(reader, splitter_config);
            let mut chunks = 0usize;
            let mut split_err = None;
            loop {
                match splitter.next_chunk() {
                    Ok(Some(chunk)) => {
                        chunks += 1;
                        if chunk_tx.send(Some(chunk)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        split_err = Some(e);
                        break;
                    }
                }
            }

            // One sentinel per worker, even on failure, so the pool drains
            // and the aggregator terminates before we surface the error.
            for _ in 0..workers {
                let _ = chunk_tx.send(None);
            }
            drop(chunk_tx);

            let table = aggregator
                .join()
                .map_err(|_| WordmillError::thread_join("aggregator thread panicked"))?;

            match split_err {
                Some(e) => Err(e),
                None => Ok((table, chunks)),
            }
        })?;

        info!("gathered {} distinct words from {chunks} chunks", table.len());

        validate_table(&mut table, self.config.cycle_policy);

        let emit_config = EmitConfig {
            min_len: self.config.min_len,
            max_len: self.config.max_len,
        };
        let words_emitted = emit_words(&table, &emit_config, writer)?;

        Ok(ExtractStats {
            chunks,
            words_total: table.len(),
            words_emitted,
        })
    }
}

fn worker_loop(
    chunks: &Receiver<Option<Vec<u8>>>,
    entries: &Sender<Option<WordEntry>>,
    parser: &RecordParser,
) {
    while let Ok(message) = chunks.recv() {
        let Some(chunk) = message else {
            break;
        };
        for entry in parser.parse_block(&chunk) {
            if entries.send(Some(entry)).is_err() {
                return;
            }
        }
    }
    let _ = entries.send(None);
}
