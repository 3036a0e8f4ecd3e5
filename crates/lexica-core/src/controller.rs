use std::sync::atomic::{AtomicU64, Ordering};

use lexica_client::Lookup;
use lexica_store::{HistoryStore, Storage};
use lexica_types::DictionaryEntry;
use tokio::sync::RwLock;

/// Observable lookup state. Exactly one of the idle / loading / success /
/// error shapes at a time; `data` is retained while a new request is loading.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub data: Option<Vec<DictionaryEntry>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owns the request lifecycle for word lookups and the search history.
///
/// Each submit takes a monotonic sequence number; a completion whose number
/// is no longer current is discarded, so the visible state always belongs to
/// the latest submit even when requests overlap.
pub struct LookupController<L: Lookup, S: Storage> {
    lookup: L,
    state: RwLock<SearchState>,
    history: RwLock<HistoryStore<S>>,
    seq: AtomicU64,
}

impl<L: Lookup, S: Storage> LookupController<L, S> {
    pub fn new(lookup: L, history: HistoryStore<S>) -> Self {
        Self {
            lookup,
            state: RwLock::new(SearchState::default()),
            history: RwLock::new(history),
            seq: AtomicU64::new(0),
        }
    }

    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    pub async fn history(&self) -> Vec<String> {
        self.history.read().await.history().to_vec()
    }

    pub async fn clear_history(&self) {
        self.history.write().await.clear();
    }

    /// Submit a term for lookup. Empty post-trim terms are a no-op.
    ///
    /// Transitions strictly Loading -> exactly one of Success/Error for the
    /// current submit; the terminal state lands in `state()` and a successful
    /// term is recorded in history.
    pub async fn submit(&self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return;
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.lookup.entries(trimmed).await;

        let mut state = self.state.write().await;
        // Superseded by a newer submit while in flight
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("discarding stale lookup completion for '{trimmed}'");
            return;
        }

        match result {
            Ok(entries) => {
                tracing::info!("lookup '{trimmed}': {} entries", entries.len());
                state.data = Some(entries);
                state.error = None;
                state.loading = false;
                drop(state);
                self.history.write().await.record_search(trimmed);
            }
            Err(e) => {
                tracing::info!("lookup '{trimmed}' failed: {e:?}");
                state.error = Some(e.to_string());
                state.data = None;
                state.loading = false;
            }
        }
    }
}
