use crate::{SearchStatus, WatchlistEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input: String,
    pub query: String,
    pub status: SearchStatus,
    pub results: Vec<ResultRowView>,
    pub watchlist: Vec<WatchlistEntry>,
    pub hydrated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub kind: Option<String>,
    /// Whether this result is currently on the watchlist.
    pub saved: bool,
}
