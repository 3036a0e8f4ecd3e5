use lexica_types::normalize_term;

use crate::record;
use crate::storage::Storage;

pub const HISTORY_KEY: &str = "dictionary-history";
pub const MAX_HISTORY: usize = 10;

/// Recency list of normalized search terms, most-recent-first, capped at 10.
pub struct HistoryStore<S: Storage> {
    storage: S,
    terms: Vec<String>,
}

impl<S: Storage> HistoryStore<S> {
    pub fn load(storage: S) -> Self {
        let mut terms: Vec<String> = record::load_or_default(&storage, HISTORY_KEY);
        terms.truncate(MAX_HISTORY);
        Self { storage, terms }
    }

    pub fn history(&self) -> &[String] {
        &self.terms
    }

    /// Normalize, drop any existing equal entry, prepend, truncate to 10.
    pub fn record_search(&mut self, term: &str) {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return;
        }

        self.terms.retain(|t| t != &normalized);
        self.terms.insert(0, normalized);
        self.terms.truncate(MAX_HISTORY);

        if let Err(e) = record::persist(&self.storage, HISTORY_KEY, &self.terms) {
            tracing::warn!("failed to persist search history: {e}");
        }
    }

    /// Empties the list and removes the persisted key entirely.
    pub fn clear(&mut self) {
        self.terms.clear();
        if let Err(e) = self.storage.remove(HISTORY_KEY) {
            tracing::warn!("failed to clear search history: {e}");
        }
    }
}
