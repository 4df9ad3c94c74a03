//! Aggregation of parsed entries into the shared word table.
//!
//! The aggregator is the single writer of the [`WordTable`] during the
//! build phase. Workers signal exhaustion with a `None` sentinel; once one
//! sentinel per worker has arrived the table is complete.

use crossbeam_channel::Receiver;

use crate::entry::{WordEntry, WordTable};

/// Drain the entry channel into a fresh table.
///
/// Counts down one sentinel per worker. A disconnected channel is treated
/// the same as full exhaustion, so a panicked worker cannot wedge the
/// pipeline.
pub fn gather_entries(entries: &Receiver<Option<WordEntry>>, workers: usize) -> WordTable {
    let mut table = WordTable::new();
    let mut remaining = workers;

    while remaining > 0 {
        match entries.recv() {
            Ok(Some(entry)) => table.merge(entry),
            Ok(None) => remaining -= 1,
            Err(_) => break,
        }
    }

    table
}
