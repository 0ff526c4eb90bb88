use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use watchbill_core::{init, update, AppState, Msg, WatchlistEntry};
use watchbill_logging::app_info;

use crate::effects::EffectRunner;
use crate::input::{self, UiCommand};
use crate::render;

pub fn run() {
    let (cmd_tx, cmd_rx) = mpsc::channel::<UiCommand>();
    spawn_input_thread(cmd_tx);

    let runner = EffectRunner::new();
    let (mut state, effects) = init();
    runner.run(effects);
    render::help();

    loop {
        // Engine completions first so fetch results render promptly.
        while let Some(msg) = runner.try_recv() {
            dispatch(&mut state, msg, &runner);
        }

        match cmd_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(UiCommand::Quit) => break,
            Ok(command) => {
                if let Some(msg) = resolve(&state, command) {
                    dispatch(&mut state, msg, &runner);
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if state.consume_dirty() {
            render::render(&state.view());
        }
    }

    app_info!("Exiting");
}

fn spawn_input_thread(cmd_tx: mpsc::Sender<UiCommand>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let command = input::parse(&line);
            let quitting = command == UiCommand::Quit;
            if cmd_tx.send(command).is_err() || quitting {
                break;
            }
        }
        let _ = cmd_tx.send(UiCommand::Quit);
    });
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}

/// Turns a parsed terminal command into a core message, handling the
/// presentation-only commands directly.
fn resolve(state: &AppState, command: UiCommand) -> Option<Msg> {
    match command {
        UiCommand::Search(term) => Some(Msg::SearchRequested(term)),
        UiCommand::Refresh => Some(Msg::RefreshRequested),
        UiCommand::Toggle(index) => {
            // Interactive toggles are gated on hydration: before it
            // completes, a persisted write would be suppressed and the
            // toggle silently lost on restart.
            if !state.hydrated() {
                println!("Watchlist is still loading, try again in a moment.");
                return None;
            }
            let view = state.view();
            let Some(row) = view.results.get(index - 1) else {
                println!("No result #{index} on screen.");
                return None;
            };
            Some(Msg::WatchlistToggled(WatchlistEntry {
                id: row.id.clone(),
                title: row.title.clone(),
                year: row.year.clone(),
                poster_url: row.poster_url.clone(),
            }))
        }
        UiCommand::ShowWatchlist => {
            render::render_watchlist(&state.view());
            None
        }
        UiCommand::Clear => {
            if !state.hydrated() {
                println!("Watchlist is still loading, try again in a moment.");
                return None;
            }
            Some(Msg::WatchlistCleared)
        }
        UiCommand::Help => {
            render::help();
            None
        }
        UiCommand::Nothing => None,
        UiCommand::Unknown(line) => {
            println!("Unrecognized command: {line} (:help for commands)");
            None
        }
        UiCommand::Quit => None,
    }
}
