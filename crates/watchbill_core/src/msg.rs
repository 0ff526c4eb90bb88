use crate::{FetchId, SearchFailure, SearchResult, WatchlistEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box; no fetch is triggered.
    InputChanged(String),
    /// User submitted the current input as a new search.
    SearchSubmitted,
    /// A suggestion chip or reset affordance set both input and query.
    SearchRequested(String),
    /// User asked for a re-fetch of the current query (pull-to-refresh).
    RefreshRequested,
    /// Engine completion for a search fetch.
    SearchFinished {
        fetch_id: FetchId,
        outcome: Result<Vec<SearchResult>, SearchFailure>,
    },
    /// Persisted watchlist record loaded at startup.
    WatchlistHydrated(Vec<WatchlistEntry>),
    /// User toggled an entry on or off the watchlist.
    WatchlistToggled(WatchlistEntry),
    /// User emptied the watchlist.
    WatchlistCleared,
    /// A background persistence write failed.
    PersistFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
