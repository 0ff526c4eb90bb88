use crate::{FetchId, WatchlistEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the persisted watchlist record once at startup.
    LoadWatchlist,
    /// Write the full current watchlist record to durable storage.
    PersistWatchlist { entries: Vec<WatchlistEntry> },
    /// Issue a search fetch, superseding any fetch still in flight.
    Search { fetch_id: FetchId, query: String },
    /// Surface a transient notice to the user (toast equivalent).
    ShowNotice { kind: NoticeKind, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}
