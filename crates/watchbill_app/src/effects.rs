use std::path::PathBuf;
use std::sync::mpsc;

use watchbill_core::{Effect, Msg, SearchFailure, SearchResult, WatchlistEntry};
use watchbill_engine::{
    EngineConfig, EngineEvent, EngineHandle, SavedTitle, SearchError, SearchHit, WatchlistRecord,
};
use watchbill_logging::{app_debug, app_info, app_warn};

use crate::render;

/// Executes core effects against the engine and translates engine events
/// back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
    events: mpsc::Receiver<EngineEvent>,
}

impl EffectRunner {
    pub fn new() -> Self {
        let storage_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("data");

        let mut config = EngineConfig::default_with_storage(storage_dir);
        config.omdb.api_key = std::env::var("OMDB_API_KEY").unwrap_or_default();

        let (engine, events) = EngineHandle::new(config);
        Self { engine, events }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadWatchlist => self.engine.load_watchlist(),
                Effect::PersistWatchlist { entries } => {
                    self.engine.persist_watchlist(to_record(entries));
                }
                Effect::Search { fetch_id, query } => {
                    app_info!("Search fetch_id={} query={}", fetch_id, query);
                    self.engine.search(fetch_id, query);
                }
                Effect::ShowNotice { kind, message } => render::notice(kind, &message),
            }
        }
    }

    /// Drains one pending engine event into a core message, if any.
    pub fn try_recv(&self) -> Option<Msg> {
        let msg = match self.events.try_recv().ok()? {
            EngineEvent::SearchFinished { fetch_id, result } => Msg::SearchFinished {
                fetch_id,
                outcome: map_search_result(result),
            },
            EngineEvent::WatchlistLoaded(record) => {
                Msg::WatchlistHydrated(record.into_values().map(map_saved_title).collect())
            }
            EngineEvent::WatchlistPersisted { result } => match result {
                Ok(()) => {
                    app_debug!("Watchlist record persisted");
                    Msg::NoOp
                }
                Err(message) => {
                    app_warn!("Watchlist persist failed: {}", message);
                    Msg::PersistFailed { message }
                }
            },
        };
        Some(msg)
    }
}

fn map_search_result(
    result: Result<Vec<SearchHit>, SearchError>,
) -> Result<Vec<SearchResult>, SearchFailure> {
    match result {
        Ok(hits) => Ok(hits.into_iter().map(map_hit).collect()),
        Err(SearchError::Cancelled) => Err(SearchFailure::Cancelled),
        Err(err) => Err(SearchFailure::Failed(err.to_string())),
    }
}

fn map_hit(hit: SearchHit) -> SearchResult {
    SearchResult {
        id: hit.id,
        title: hit.title,
        year: hit.year,
        poster_url: hit.poster_url,
        kind: hit.kind,
    }
}

fn map_saved_title(saved: SavedTitle) -> WatchlistEntry {
    WatchlistEntry {
        id: saved.id,
        title: saved.title,
        year: saved.year,
        poster_url: saved.poster_url,
    }
}

fn to_record(entries: Vec<WatchlistEntry>) -> WatchlistRecord {
    entries
        .into_iter()
        .map(|entry| {
            (
                entry.id.clone(),
                SavedTitle {
                    id: entry.id,
                    title: entry.title,
                    year: entry.year,
                    poster_url: entry.poster_url,
                },
            )
        })
        .collect()
}
