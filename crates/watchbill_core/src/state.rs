use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, ResultRowView};

/// Seed term used when the user submits an empty search.
pub const DEFAULT_QUERY: &str = "Marvel";

/// Identifies a single fetch; only the most recently issued fetch may
/// transition search state.
pub type FetchId = u64;

/// One row of an upstream search response. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub year: String,
    /// Upstream sends the literal string "N/A" when no poster exists.
    pub poster_url: String,
    pub kind: Option<String>,
}

/// Projection of a [`SearchResult`] kept on the watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

impl From<&SearchResult> for WatchlistEntry {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id.clone(),
            title: result.title.clone(),
            year: result.year.clone(),
            poster_url: result.poster_url.clone(),
        }
    }
}

/// Search session status. `Refreshing` keeps the previous results visible
/// while a re-fetch of the same query is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Loading,
    Refreshing,
    Ready,
    Failed(String),
}

/// Terminal outcome of a fetch that did not produce results.
///
/// `Cancelled` means the fetch was superseded; it never transitions state.
/// The message in `Failed` is already normalized by the IO layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchSession {
    input: String,
    query: String,
    results: Vec<SearchResult>,
    status: SearchStatus,
    fetch_seq: FetchId,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            input: String::new(),
            query: String::new(),
            results: Vec::new(),
            status: SearchStatus::Loading,
            fetch_seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Watchlist {
    entries: BTreeMap<String, WatchlistEntry>,
    hydrated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: SearchSession,
    watchlist: Watchlist,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.search.input.clone(),
            query: self.search.query.clone(),
            status: self.search.status.clone(),
            results: self
                .search
                .results
                .iter()
                .map(|result| ResultRowView {
                    id: result.id.clone(),
                    title: result.title.clone(),
                    year: result.year.clone(),
                    poster_url: result.poster_url.clone(),
                    kind: result.kind.clone(),
                    saved: self.is_saved(&result.id),
                })
                .collect(),
            watchlist: self.watchlist.entries.values().cloned().collect(),
            hydrated: self.watchlist.hydrated,
        }
    }

    /// Returns the dirty flag and resets it. The app layer renders only
    /// when a message produced a visible change.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.watchlist.entries.contains_key(id)
    }

    pub fn hydrated(&self) -> bool {
        self.watchlist.hydrated
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.search.input = text;
    }

    pub(crate) fn input(&self) -> &str {
        &self.search.input
    }

    /// Commits `query` as the active query and allocates the fetch id that
    /// identifies the new in-flight fetch. Any earlier fetch id is stale
    /// from this point on.
    pub(crate) fn begin_fetch(&mut self, query: String, status: SearchStatus) -> FetchId {
        self.search.query = query;
        self.search.status = status;
        self.search.fetch_seq += 1;
        self.search.fetch_seq
    }

    pub(crate) fn current_fetch(&self) -> FetchId {
        self.search.fetch_seq
    }

    pub(crate) fn status(&self) -> &SearchStatus {
        &self.search.status
    }

    pub(crate) fn apply_results(&mut self, results: Vec<SearchResult>) {
        self.search.results = results;
        self.search.status = SearchStatus::Ready;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.search.results.clear();
        self.search.status = SearchStatus::Failed(message);
    }

    /// Replaces the watchlist with the persisted record. Hydration happens
    /// exactly once; later calls are ignored by the reducer.
    pub(crate) fn hydrate(&mut self, entries: Vec<WatchlistEntry>) {
        self.watchlist.entries = entries
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        self.watchlist.hydrated = true;
    }

    /// Removes the entry if present, inserts it otherwise.
    pub(crate) fn toggle(&mut self, entry: WatchlistEntry) {
        if self.watchlist.entries.remove(&entry.id).is_none() {
            self.watchlist.entries.insert(entry.id.clone(), entry);
        }
    }

    pub(crate) fn clear_watchlist(&mut self) {
        self.watchlist.entries.clear();
    }

    pub(crate) fn watchlist_snapshot(&self) -> Vec<WatchlistEntry> {
        self.watchlist.entries.values().cloned().collect()
    }
}
