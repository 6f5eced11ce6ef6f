//! Recursive filename search.
//!
//! Each search runs on its own worker thread and reports through an event
//! channel: one `Match` per hit, a `Progress` notification after every 20
//! matches, and a terminal `Completed` exactly once. The caller holds a
//! `SearchHandle` to consume events, cancel, or block for the outcome.
//!
//! Cancellation is cooperative: the worker observes the token before each
//! entry it examines and then completes normally with whatever it has
//! accumulated. A cancelled search is not an error.

mod walker;

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::errors::FileNestError;

/// How often (in matches) a `Progress` event is emitted. Fixed cadence so
/// callers and tests can rely on it.
pub const PROGRESS_EVERY: usize = 20;

/// One search invocation: name-only, case-insensitive substring match.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub root: PathBuf,
    pub term: String,
    pub result_limit: usize,
}

impl SearchQuery {
    pub fn new(root: impl Into<PathBuf>, term: impl Into<String>, result_limit: usize) -> Self {
        Self {
            root: root.into(),
            term: term.into(),
            result_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub path: PathBuf,
}

/// Terminal state of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub matches: Vec<SearchMatch>,
    /// True when the run ended at a cancellation checkpoint rather than by
    /// exhausting the tree or reaching the limit.
    pub cancelled: bool,
    /// Directories skipped due to per-directory I/O errors (permission
    /// denied, vanished mid-walk). Never fatal.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub enum SearchEvent {
    Match(SearchMatch),
    Progress { count: usize },
    Completed(SearchOutcome),
}

/// Live handle to a running (or finished) search.
#[derive(Debug)]
pub struct SearchHandle {
    cancel: CancelToken,
    events: Receiver<SearchEvent>,
    worker: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Request cancellation; the worker stops at its next checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token for wiring external cancellation (e.g. a signal handler).
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Blocking event stream; yields until `Completed` has been delivered and
    /// the worker hangs up.
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// Drain all events and return the terminal outcome.
    pub fn wait(mut self) -> SearchOutcome {
        let mut outcome = None;
        while let Ok(event) = self.events.recv() {
            if let SearchEvent::Completed(o) = event {
                outcome = Some(o);
            }
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        // The worker always sends Completed before hanging up; an empty
        // outcome can only mean it panicked, which join() surfaced above.
        outcome.unwrap_or(SearchOutcome {
            matches: Vec::new(),
            cancelled: true,
            skipped: 0,
        })
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        // A dropped handle means no consumer; stop the worker promptly and
        // detach it rather than blocking the caller on join.
        self.cancel.cancel();
    }
}

/// Validate the query and start a worker for it.
///
/// Fails immediately with `InvalidRoot` when the root is empty, missing, or
/// not a directory; there is no other fatal error path.
pub fn spawn_search(query: SearchQuery) -> Result<SearchHandle, FileNestError> {
    spawn_search_with(query, CancelToken::new())
}

/// Like `spawn_search`, but observing a caller-supplied token (e.g. one a
/// signal handler already holds).
pub fn spawn_search_with(
    query: SearchQuery,
    cancel: CancelToken,
) -> Result<SearchHandle, FileNestError> {
    if query.root.as_os_str().is_empty() || !query.root.is_dir() {
        return Err(FileNestError::InvalidRoot(query.root));
    }

    let (tx, rx) = channel();
    let worker_cancel = cancel.clone();
    let worker = thread::spawn(move || {
        debug!(root = %query.root.display(), term = %query.term, limit = query.result_limit, "search worker started");
        let outcome = walker::run(&query, &worker_cancel, &tx);
        // Receiver may already be gone; completion is then moot.
        let _ = tx.send(SearchEvent::Completed(outcome));
    });

    Ok(SearchHandle {
        cancel,
        events: rx,
        worker: Some(worker),
    })
}

/// One caller-visible search slot: at most one outstanding search, and
/// starting a new one cancels whatever the slot still holds.
#[derive(Default)]
pub struct SearchSlot {
    active: Option<SearchHandle>,
}

impl SearchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any active search and start a new one in its place.
    pub fn start(&mut self, query: SearchQuery) -> Result<&SearchHandle, FileNestError> {
        self.cancel_active();
        let handle = spawn_search(query)?;
        Ok(self.active.insert(handle))
    }

    /// Cancel and discard the active search, if any.
    pub fn cancel_active(&mut self) {
        if let Some(prior) = self.active.take() {
            prior.cancel();
        }
    }

    /// Hand the active search over to the caller.
    pub fn take(&mut self) -> Option<SearchHandle> {
        self.active.take()
    }
}
