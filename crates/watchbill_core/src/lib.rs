//! Watchbill core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, NoticeKind};
pub use msg::Msg;
pub use state::{
    AppState, FetchId, SearchFailure, SearchResult, SearchStatus, WatchlistEntry, DEFAULT_QUERY,
};
pub use update::{init, update};
pub use view_model::{AppViewModel, ResultRowView};
