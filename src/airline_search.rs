//! Incremental airline search.
//!
//! Every call to [`SearchController::search`] supersedes the previous one.
//! Requests run on worker threads and only the request holding the current
//! generation may commit to the shared [`SearchState`].

use crate::airline_api::{Airline, AirlineSource, SearchError};
use crate::notify::{Notifier, Toast};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

pub const DEFAULT_MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub results: Vec<Airline>,
    pub is_loading: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            is_loading: true,
        }
    }
}

/// Handle for one outstanding request.
#[derive(Debug, Clone)]
pub struct RequestToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `false` once a newer search (or a cancel) has been issued.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

struct Shared {
    state: Mutex<SearchState>,
    generation: Arc<AtomicU64>,
    /// Generation of the last request that ended in an error.
    failed: AtomicU64,
    subscribers: Mutex<Vec<Sender<SearchState>>>,
}

impl Shared {
    fn publish(&self, state: &SearchState) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.retain(|tx| tx.send(state.clone()).is_ok());
        }
    }

    /// Apply `f` to the state unless `token` has been superseded.
    fn commit(&self, token: &RequestToken, f: impl FnOnce(&mut SearchState)) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        if !token.is_current() {
            return false;
        }
        f(&mut state);
        // Publish under the state lock so subscribers see commits in order.
        self.publish(&state);
        true
    }
}

pub struct SearchController {
    source: Arc<dyn AirlineSource>,
    notifier: Arc<dyn Notifier>,
    shared: Arc<Shared>,
    max_results: usize,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl SearchController {
    /// Create a controller and reset it to the empty, idle state.
    pub fn new(
        source: Arc<dyn AirlineSource>,
        notifier: Arc<dyn Notifier>,
        max_results: usize,
    ) -> Self {
        let controller = Self {
            source,
            notifier,
            shared: Arc::new(Shared {
                state: Mutex::new(SearchState::default()),
                generation: Arc::new(AtomicU64::new(0)),
                failed: AtomicU64::new(0),
                subscribers: Mutex::new(Vec::new()),
            }),
            max_results,
            workers: Mutex::new(Vec::new()),
        };
        controller.search("");
        controller
    }

    pub fn state(&self) -> SearchState {
        self.shared
            .state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Receive a snapshot after every committed state change.
    pub fn subscribe(&self) -> Receiver<SearchState> {
        let (tx, rx) = channel();
        if let Ok(mut subs) = self.shared.subscribers.lock() {
            subs.push(tx);
        }
        rx
    }

    /// `true` when the most recent search ended in an error.
    pub fn last_search_failed(&self) -> bool {
        let failed = self.shared.failed.load(Ordering::SeqCst);
        failed != 0 && failed == self.shared.generation.load(Ordering::SeqCst)
    }

    fn next_token(&self) -> RequestToken {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken {
            generation,
            current: self.shared.generation.clone(),
        }
    }

    /// Start a search for `query`, superseding any request still in flight.
    pub fn search(&self, query: &str) {
        let token = self.next_token();

        if query.is_empty() {
            self.shared.commit(&token, |state| {
                state.results.clear();
                state.is_loading = false;
            });
            return;
        }

        self.shared.commit(&token, |state| state.is_loading = true);

        let source = self.source.clone();
        let notifier = self.notifier.clone();
        let shared = self.shared.clone();
        let max_results = self.max_results;
        let query = query.to_string();
        let handle = thread::spawn(move || {
            let outcome = source.search(&query, &token);
            resolve(&shared, notifier.as_ref(), &token, &query, max_results, outcome);
        });
        if let Ok(mut workers) = self.workers.lock() {
            workers.retain(|w| !w.is_finished());
            workers.push(handle);
        }
    }

    /// Invalidate the in-flight request and clear the loading flag.
    pub fn cancel(&self) {
        let token = self.next_token();
        self.shared.commit(&token, |state| state.is_loading = false);
    }

    /// Block until every worker spawned so far has finished.
    pub fn wait_idle(&self) {
        let handles = match self.workers.lock() {
            Ok(mut workers) => std::mem::take(&mut *workers),
            Err(_) => return,
        };
        for handle in handles {
            let _ = handle.join();
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn resolve(
    shared: &Shared,
    notifier: &dyn Notifier,
    token: &RequestToken,
    query: &str,
    max_results: usize,
    outcome: Result<Vec<Airline>, SearchError>,
) {
    match outcome {
        Ok(mut airlines) => {
            airlines.truncate(max_results);
            let count = airlines.len();
            if shared.commit(token, |state| {
                state.results = airlines;
                state.is_loading = false;
            }) {
                tracing::debug!(query, count, "airline search finished");
            } else {
                tracing::debug!(query, "discarding superseded airline results");
            }
        }
        Err(err) if err.is_cancelled() => {
            shared.commit(token, |state| state.is_loading = false);
            tracing::debug!(query, "airline search cancelled");
        }
        Err(err) => {
            if shared.commit(token, |state| state.is_loading = false) {
                shared.failed.store(token.generation(), Ordering::SeqCst);
                tracing::error!(query, error = %err, "airline search failed");
                notifier.notify(Toast::failure("Oops! Something went wrong.", err.to_string()));
            } else {
                tracing::debug!(query, error = %err, "ignoring error from superseded search");
            }
        }
    }
}
