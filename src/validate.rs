//! Conditional validity resolution over the dependency graph.
//!
//! A word with dependencies is valid when at least one dependency resolves
//! valid. Resolution is a memoized depth-first traversal with an explicit
//! stack, so arbitrarily deep dependency chains cannot exhaust the call
//! stack. Cycles are detected via the per-entry `in_progress` marker and
//! resolved according to [`CyclePolicy`].

use log::warn;
use serde::{Deserialize, Serialize};

use crate::entry::WordTable;

/// How a detected dependency cycle is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CyclePolicy {
    /// Treat the cycle as benign: the entry that detected it is credited as
    /// valid. This mirrors the historical extractor behavior and favors
    /// false positives.
    #[default]
    Accept,

    /// Ignore the cyclic edge: the entry is valid only if some other
    /// dependency independently resolves valid.
    Reject,
}

/// One suspended node on the traversal stack.
struct Frame {
    word: String,
    deps: Vec<String>,
    next: usize,
}

impl Frame {
    /// Mark `word` in progress and snapshot its dependency set.
    fn open(table: &mut WordTable, word: String) -> Frame {
        let deps = match table.get_mut(&word) {
            Some(entry) => {
                entry.in_progress = true;
                entry.deps.iter().cloned().collect()
            }
            None => Vec::new(),
        };
        Frame {
            word,
            deps,
            next: 0,
        }
    }
}

/// Resolve validity for every entry in the table.
///
/// Postcondition: every entry has `validated = true` and `in_progress =
/// false`, even in the presence of cycles. Each entry's resolution body
/// runs at most once; later reaches return the cached result.
pub fn validate_table(table: &mut WordTable, policy: CyclePolicy) {
    let words: Vec<String> = table.words().cloned().collect();
    for word in words {
        let pending = table.get(&word).is_some_and(|e| !e.validated);
        if pending {
            resolve(table, word, policy);
        }
    }

    // Under Reject, a node finalized while its cycle was still open may
    // have missed support that only resolved after the stack unwound.
    // The traversal never credits a node incorrectly, so sweeping the
    // invalid nodes to a fixpoint repairs exactly those early
    // finalizations and makes the outcome independent of traversal order.
    if policy == CyclePolicy::Reject {
        propagate_validity(table);
    }
}

fn propagate_validity(table: &mut WordTable) {
    let words: Vec<String> = table.words().cloned().collect();
    loop {
        let mut changed = false;
        for word in &words {
            let credited = match table.get(word) {
                Some(entry) if !entry.valid => entry
                    .deps
                    .iter()
                    .any(|dep| table.get(dep).is_some_and(|e| e.valid)),
                _ => false,
            };
            if credited {
                if let Some(entry) = table.get_mut(word) {
                    entry.valid = true;
                }
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

fn resolve(table: &mut WordTable, root: String, policy: CyclePolicy) {
    let mut stack = vec![Frame::open(table, root)];

    'outer: while let Some(frame) = stack.last_mut() {
        let mut credited = false;

        while frame.next < frame.deps.len() {
            let dep = frame.deps[frame.next].clone();

            let Some(entry) = table.get(&dep) else {
                // Absent from the table: unsatisfiable, skip.
                frame.next += 1;
                continue;
            };

            if entry.validated {
                if entry.valid {
                    credited = true;
                    break;
                }
                frame.next += 1;
                continue;
            }

            if entry.in_progress {
                match policy {
                    CyclePolicy::Accept => {
                        warn!(
                            "cycle detected while validating '{}' (via '{dep}'); accepting as valid",
                            frame.word
                        );
                        credited = true;
                        break;
                    }
                    CyclePolicy::Reject => {
                        warn!(
                            "cycle detected while validating '{}' (via '{dep}'); ignoring cyclic dependency",
                            frame.word
                        );
                        frame.next += 1;
                        continue;
                    }
                }
            }

            // Unvisited dependency: descend. `next` is left pointing at it
            // so this frame re-examines the now-memoized result on resume.
            let child = Frame::open(table, dep);
            stack.push(child);
            continue 'outer;
        }

        let valid = credited || frame.deps.is_empty();
        let word = std::mem::take(&mut frame.word);
        stack.pop();

        if let Some(entry) = table.get_mut(&word) {
            entry.in_progress = false;
            entry.validated = true;
            entry.valid = valid;
        }
    }
}
