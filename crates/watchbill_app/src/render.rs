use watchbill_core::{AppViewModel, NoticeKind, SearchStatus};

/// Renders the search session. Called only when a message produced a
/// visible change.
pub fn render(view: &AppViewModel) {
    match &view.status {
        SearchStatus::Loading => {
            println!("Searching \"{}\"...", view.query);
            return;
        }
        SearchStatus::Refreshing => {
            println!("Refreshing \"{}\"...", view.query);
            return;
        }
        SearchStatus::Failed(message) => {
            println!("Search failed: {message}");
            println!("Type a new search, or :refresh to retry.");
            return;
        }
        SearchStatus::Ready => {}
    }

    if view.results.is_empty() {
        println!("No results for \"{}\".", view.query);
        return;
    }

    println!("Results for \"{}\":", view.query);
    for (index, row) in view.results.iter().enumerate() {
        let marker = if row.saved { "*" } else { " " };
        let kind = row.kind.as_deref().unwrap_or("movie");
        println!(
            "{marker} {:>2}. {} ({}) [{kind}]",
            index + 1,
            row.title,
            row.year
        );
    }
}

pub fn render_watchlist(view: &AppViewModel) {
    if view.watchlist.is_empty() {
        println!("Watchlist is empty.");
        return;
    }
    println!("Watchlist ({} saved):", view.watchlist.len());
    for entry in &view.watchlist {
        println!("  - {} ({})", entry.title, entry.year);
    }
}

/// Toast-style transient notice.
pub fn notice(kind: NoticeKind, message: &str) {
    match kind {
        NoticeKind::Success => println!("[ok] {message}"),
        NoticeKind::Error => println!("[!!] {message}"),
    }
}

pub fn help() {
    println!("Type a title to search. Commands:");
    println!("  :refresh      re-run the current search");
    println!("  :save N       toggle result N on the watchlist");
    println!("  :watchlist    show saved titles");
    println!("  :clear        empty the watchlist");
    println!("  :quit         exit");
}
