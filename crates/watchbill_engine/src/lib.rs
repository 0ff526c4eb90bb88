//! Watchbill engine: IO layer and effect execution.
mod engine;
mod omdb;
mod storage;
mod types;
mod watchlist;

pub use engine::{EngineConfig, EngineHandle};
pub use omdb::{OmdbClient, OmdbSettings, SearchClient};
pub use storage::{ensure_storage_dir, JsonFileStorage, KeyValueStorage, StorageError};
pub use types::{EngineEvent, SavedTitle, SearchError, SearchHit, WatchlistRecord};
pub use watchlist::{load_watchlist, save_watchlist, WATCHLIST_KEY};
