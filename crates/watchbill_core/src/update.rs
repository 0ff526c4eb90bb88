use crate::{
    AppState, Effect, Msg, NoticeKind, SearchFailure, SearchResult, SearchStatus, DEFAULT_QUERY,
};

/// Builds the boot state and the effects that hydrate it: one read of the
/// persisted watchlist and an implicit search for the default query.
pub fn init() -> (AppState, Vec<Effect>) {
    let mut state = AppState::new();
    state.set_input(DEFAULT_QUERY.to_string());
    let fetch_id = state.begin_fetch(DEFAULT_QUERY.to_string(), SearchStatus::Loading);
    state.mark_dirty();
    let effects = vec![
        Effect::LoadWatchlist,
        Effect::Search {
            fetch_id,
            query: DEFAULT_QUERY.to_string(),
        },
    ];
    (state, effects)
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = effective_query(state.input());
            start_search(&mut state, query, SearchStatus::Loading)
        }
        Msg::SearchRequested(term) => {
            let trimmed = term.trim().to_string();
            state.set_input(trimmed.clone());
            let query = effective_query(&trimmed);
            start_search(&mut state, query, SearchStatus::Loading)
        }
        Msg::RefreshRequested => {
            let query = state.query().to_string();
            start_search(&mut state, query, SearchStatus::Refreshing)
        }
        Msg::SearchFinished { fetch_id, outcome } => {
            // A completion for anything but the latest fetch was superseded;
            // its outcome is discarded without touching state.
            if fetch_id != state.current_fetch() {
                return (state, Vec::new());
            }
            match outcome {
                Ok(results) => {
                    let was_refreshing = *state.status() == SearchStatus::Refreshing;
                    state.apply_results(dedupe_by_id(results));
                    state.mark_dirty();
                    if was_refreshing {
                        vec![Effect::ShowNotice {
                            kind: NoticeKind::Success,
                            message: "Movies refreshed".to_string(),
                        }]
                    } else {
                        Vec::new()
                    }
                }
                Err(SearchFailure::Cancelled) => {
                    return (state, Vec::new());
                }
                Err(SearchFailure::Failed(message)) => {
                    state.apply_failure(message);
                    state.mark_dirty();
                    Vec::new()
                }
            }
        }
        Msg::WatchlistHydrated(entries) => {
            // Hydration happens exactly once; a duplicate load must not
            // clobber toggles applied since the first one.
            if state.hydrated() {
                return (state, Vec::new());
            }
            state.hydrate(entries);
            state.mark_dirty();
            Vec::new()
        }
        Msg::WatchlistToggled(entry) => {
            state.toggle(entry);
            state.mark_dirty();
            persist_effects(&state)
        }
        Msg::WatchlistCleared => {
            state.clear_watchlist();
            state.mark_dirty();
            persist_effects(&state)
        }
        Msg::PersistFailed { message } => {
            vec![Effect::ShowNotice {
                kind: NoticeKind::Error,
                message: format!("Error saving watchlist: {message}"),
            }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn effective_query(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        trimmed.to_string()
    }
}

fn start_search(state: &mut AppState, query: String, status: SearchStatus) -> Vec<Effect> {
    let fetch_id = state.begin_fetch(query.clone(), status);
    state.mark_dirty();
    vec![Effect::Search { fetch_id, query }]
}

/// Full-map persistence of the current watchlist, suppressed until
/// hydration has completed so the empty boot state can never overwrite
/// previously persisted data.
fn persist_effects(state: &AppState) -> Vec<Effect> {
    if !state.hydrated() {
        return Vec::new();
    }
    vec![Effect::PersistWatchlist {
        entries: state.watchlist_snapshot(),
    }]
}

/// Keeps the first occurrence of each id, preserving upstream order.
fn dedupe_by_id(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = std::collections::BTreeSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.id.clone()))
        .collect()
}
