use watchbill_logging::app_warn;

use crate::{KeyValueStorage, StorageError, WatchlistRecord};

/// Storage key for the persisted watchlist record.
pub const WATCHLIST_KEY: &str = "watchlist:v1";

/// Reads the persisted watchlist record. Fails soft: a missing key, an
/// unreadable value, or anything that does not parse as an id-to-entry
/// object all normalize to an empty record. First run and corruption are
/// indistinguishable to the caller, and neither surfaces as an error.
pub async fn load_watchlist(storage: &dyn KeyValueStorage) -> WatchlistRecord {
    let raw = match storage.get(WATCHLIST_KEY).await {
        Ok(Some(text)) => text,
        Ok(None) => return WatchlistRecord::new(),
        Err(err) => {
            app_warn!("Failed to read watchlist record: {}", err);
            return WatchlistRecord::new();
        }
    };

    match serde_json::from_str::<WatchlistRecord>(&raw) {
        Ok(record) => record,
        Err(err) => {
            app_warn!("Failed to parse watchlist record: {}", err);
            WatchlistRecord::new()
        }
    }
}

/// Writes the full record under [`WATCHLIST_KEY`].
pub async fn save_watchlist(
    storage: &dyn KeyValueStorage,
    record: &WatchlistRecord,
) -> Result<(), StorageError> {
    let serialized = serde_json::to_string(record)?;
    storage.set(WATCHLIST_KEY, &serialized).await
}
