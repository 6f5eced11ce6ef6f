//! The traversal behind a search: depth-first, directories before their
//! contents, entries sorted by file name so a run over an unchanged tree is
//! deterministic. Symbolic links are reported by name but never followed, so
//! traversal terminates without tracking visited inodes.

use std::sync::mpsc::Sender;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::cancel::CancelToken;

use super::{PROGRESS_EVERY, SearchEvent, SearchMatch, SearchOutcome, SearchQuery};

/// Walk the query root, streaming events to `tx`, until the tree is
/// exhausted, the limit is reached, or the token is cancelled.
pub(super) fn run(
    query: &SearchQuery,
    cancel: &CancelToken,
    tx: &Sender<SearchEvent>,
) -> SearchOutcome {
    let term = query.term.to_lowercase();
    let mut matches: Vec<SearchMatch> = Vec::new();
    let mut skipped = 0usize;
    let mut cancelled = false;

    'walk: for entry in WalkDir::new(&query.root).min_depth(1).sort_by_file_name() {
        // Checkpoint: observed before every entry, mid-directory included.
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }
        if matches.len() >= query.result_limit {
            break; // covers a zero limit; otherwise the break below fires first
        }

        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // Unreadable or vanished subtree: skip and keep walking.
                skipped += 1;
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.contains(&term) {
            let m = SearchMatch {
                path: entry.into_path(),
            };
            matches.push(m.clone());
            if tx.send(SearchEvent::Match(m)).is_err() {
                // Consumer hung up; treat like cancellation.
                cancelled = true;
                break 'walk;
            }
            if matches.len() % PROGRESS_EVERY == 0
                && tx
                    .send(SearchEvent::Progress {
                        count: matches.len(),
                    })
                    .is_err()
            {
                cancelled = true;
                break 'walk;
            }
            if matches.len() >= query.result_limit {
                // Stop immediately, mid-directory included.
                break 'walk;
            }
        }
    }

    debug!(
        matches = matches.len(),
        skipped, cancelled, "search traversal finished"
    );
    SearchOutcome {
        matches,
        cancelled,
        skipped,
    }
}
