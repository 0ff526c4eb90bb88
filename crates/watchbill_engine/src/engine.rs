use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use tokio_util::sync::CancellationToken;
use watchbill_logging::{app_debug, app_error};

use crate::omdb::{OmdbClient, OmdbSettings, SearchClient};
use crate::storage::JsonFileStorage;
use crate::{watchlist, EngineEvent, WatchlistRecord};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub omdb: OmdbSettings,
    pub storage_dir: PathBuf,
}

impl EngineConfig {
    pub fn default_with_storage(storage_dir: PathBuf) -> Self {
        Self {
            omdb: OmdbSettings::default(),
            storage_dir,
        }
    }
}

enum EngineCommand {
    Search { fetch_id: u64, query: String },
    LoadWatchlist,
    PersistWatchlist(WatchlistRecord),
}

/// Handle to the IO worker. Commands go in over a channel; events come back
/// over the receiver returned by [`EngineHandle::new`], polled by the
/// application loop.
///
/// Ordering: issuing a new search cancels the predecessor's token before the
/// replacement is spawned, so at most one fetch is ever live. Persist
/// commands run on a dedicated single-writer task in submission order, so
/// durable state always converges on the most recent record.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_worker(config, cmd_rx, event_tx));

        (Self { cmd_tx }, event_rx)
    }

    pub fn search(&self, fetch_id: u64, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            fetch_id,
            query: query.into(),
        });
    }

    pub fn load_watchlist(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadWatchlist);
    }

    pub fn persist_watchlist(&self, record: WatchlistRecord) {
        let _ = self.cmd_tx.send(EngineCommand::PersistWatchlist(record));
    }
}

fn run_worker(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            app_error!("Failed to start engine runtime: {}", err);
            return;
        }
    };
    let client = match OmdbClient::new(config.omdb) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            app_error!("Failed to build search client: {}", err);
            return;
        }
    };
    let storage = Arc::new(JsonFileStorage::new(config.storage_dir));

    // Single-writer persistence queue: full-record writes settle strictly in
    // submission order, never racing each other.
    let (persist_tx, mut persist_rx) = tokio::sync::mpsc::unbounded_channel::<WatchlistRecord>();
    {
        let storage = storage.clone();
        let event_tx = event_tx.clone();
        runtime.spawn(async move {
            while let Some(record) = persist_rx.recv().await {
                let result = watchlist::save_watchlist(storage.as_ref(), &record)
                    .await
                    .map_err(|err| err.to_string());
                let _ = event_tx.send(EngineEvent::WatchlistPersisted { result });
            }
        });
    }

    let mut current_fetch = CancellationToken::new();
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Search { fetch_id, query } => {
                // Supersede the in-flight fetch before issuing the new one.
                current_fetch.cancel();
                current_fetch = CancellationToken::new();
                let token = current_fetch.clone();
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    app_debug!("search fetch_id={} query={}", fetch_id, query);
                    let result = client.search(&query, &token).await;
                    let _ = event_tx.send(EngineEvent::SearchFinished { fetch_id, result });
                });
            }
            EngineCommand::LoadWatchlist => {
                let storage = storage.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let record = watchlist::load_watchlist(storage.as_ref()).await;
                    let _ = event_tx.send(EngineEvent::WatchlistLoaded(record));
                });
            }
            EngineCommand::PersistWatchlist(record) => {
                let _ = persist_tx.send(record);
            }
        }
    }
}
