use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One hit from the upstream search endpoint, with field names normalized
/// away from the OMDb wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub kind: Option<String>,
}

/// Projection of a [`SearchHit`] as stored in the persisted watchlist
/// record, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTitle {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// The full persisted record under [`crate::WATCHLIST_KEY`].
pub type WatchlistRecord = BTreeMap<String, SavedTitle>;

/// Events emitted by the engine back to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchFinished {
        fetch_id: u64,
        result: Result<Vec<SearchHit>, SearchError>,
    },
    WatchlistLoaded(WatchlistRecord),
    WatchlistPersisted { result: Result<(), String> },
}

/// Typed search failure taxonomy. Cancellation is a first-class variant so
/// callers never have to sniff error message text for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("cancelled")]
    Cancelled,
    #[error("Request failed ({0})")]
    HttpStatus(u16),
    #[error("{0}")]
    Upstream(String),
    #[error("network error: {0}")]
    Network(String),
}
