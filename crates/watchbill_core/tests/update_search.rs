use std::sync::Once;

use watchbill_core::{
    init, update, AppState, Effect, Msg, NoticeKind, SearchFailure, SearchResult, SearchStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(watchbill_logging::initialize_for_tests);
}

fn result(id: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: format!("Movie {id}"),
        year: "2012".to_string(),
        poster_url: "N/A".to_string(),
        kind: Some("movie".to_string()),
    }
}

fn search_for(state: AppState, term: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::SearchRequested(term.to_string()))
}

fn latest_fetch_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Search { fetch_id, .. } => Some(*fetch_id),
            _ => None,
        })
        .expect("search effect")
}

#[test]
fn boot_hydrates_and_searches_the_default_query() {
    init_logging();
    let (state, effects) = init();
    let view = state.view();

    assert_eq!(view.query, "Marvel");
    assert_eq!(view.input, "Marvel");
    assert_eq!(view.status, SearchStatus::Loading);
    assert_eq!(
        effects,
        vec![
            Effect::LoadWatchlist,
            Effect::Search {
                fetch_id: 1,
                query: "Marvel".to_string(),
            },
        ]
    );
}

#[test]
fn empty_submit_falls_back_to_default_query() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("   ".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(state.query(), "Marvel");
    assert_eq!(
        effects,
        vec![Effect::Search {
            fetch_id: 1,
            query: "Marvel".to_string(),
        }]
    );
}

#[test]
fn submit_trims_the_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("  Alien  ".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(state.query(), "Alien");
    assert_eq!(latest_fetch_id(&effects), 1);
}

#[test]
fn input_change_alone_triggers_no_fetch() {
    init_logging();
    let (_, effects) = update(AppState::new(), Msg::InputChanged("Dune".to_string()));
    assert!(effects.is_empty());
}

#[test]
fn superseded_fetch_outcome_is_discarded() {
    init_logging();
    let (state, effects_a) = search_for(AppState::new(), "A");
    let fetch_a = latest_fetch_id(&effects_a);
    let (state, effects_b) = search_for(state, "B");
    let fetch_b = latest_fetch_id(&effects_b);
    assert_ne!(fetch_a, fetch_b);

    // B settles first.
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id: fetch_b,
            outcome: Ok(vec![result("ttB")]),
        },
    );
    assert_eq!(state.view().status, SearchStatus::Ready);

    // A resolves late; its outcome must not be visible in any form.
    let (state, effects) = update(
        state,
        Msg::SearchFinished {
            fetch_id: fetch_a,
            outcome: Ok(vec![result("ttA")]),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.results[0].id, "ttB");
}

#[test]
fn cancelled_fetch_makes_no_transition() {
    init_logging();
    let (state, effects) = search_for(AppState::new(), "Blade Runner");
    let fetch_id = latest_fetch_id(&effects);

    let (state, effects) = update(
        state,
        Msg::SearchFinished {
            fetch_id,
            outcome: Err(SearchFailure::Cancelled),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().status, SearchStatus::Loading);
}

#[test]
fn results_are_deduplicated_first_occurrence_wins() {
    init_logging();
    let (state, effects) = search_for(AppState::new(), "dup");
    let fetch_id = latest_fetch_id(&effects);

    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id,
            outcome: Ok(vec![result("a"), result("b"), result("a")]),
        },
    );
    let ids: Vec<_> = state.view().results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn refresh_reuses_the_query_and_reports_success() {
    init_logging();
    let (state, effects) = search_for(AppState::new(), "Alien");
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id: latest_fetch_id(&effects),
            outcome: Ok(vec![result("tt1")]),
        },
    );

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(state.query(), "Alien");
    assert_eq!(state.view().input, "Alien");
    assert_eq!(state.view().status, SearchStatus::Refreshing);
    // Prior results stay visible while the re-fetch runs.
    assert_eq!(state.view().results.len(), 1);

    let (state, effects) = update(
        state,
        Msg::SearchFinished {
            fetch_id: latest_fetch_id(&effects),
            outcome: Ok(vec![result("tt1"), result("tt2")]),
        },
    );
    assert_eq!(state.view().status, SearchStatus::Ready);
    assert_eq!(
        effects,
        vec![Effect::ShowNotice {
            kind: NoticeKind::Success,
            message: "Movies refreshed".to_string(),
        }]
    );
}

#[test]
fn failure_clears_results_and_records_the_message() {
    init_logging();
    let (state, effects) = search_for(AppState::new(), "Alien");
    let fetch_id = latest_fetch_id(&effects);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id,
            outcome: Ok(vec![result("tt1")]),
        },
    );

    let (state, effects) = update(state, Msg::RefreshRequested);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id: latest_fetch_id(&effects),
            outcome: Err(SearchFailure::Failed("Invalid API key!".to_string())),
        },
    );
    let view = state.view();
    assert_eq!(view.status, SearchStatus::Failed("Invalid API key!".to_string()));
    assert!(view.results.is_empty());
}

#[test]
fn not_found_normalizes_to_ready_with_zero_results() {
    init_logging();
    let (state, effects) = search_for(AppState::new(), "zzzzz");
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            fetch_id: latest_fetch_id(&effects),
            outcome: Ok(Vec::new()),
        },
    );
    let view = state.view();
    assert_eq!(view.status, SearchStatus::Ready);
    assert!(view.results.is_empty());
}
