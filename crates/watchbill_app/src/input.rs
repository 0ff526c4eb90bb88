/// A parsed line of terminal input. Free text is a search; everything else
/// starts with a colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    Refresh,
    Toggle(usize),
    ShowWatchlist,
    Clear,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

pub fn parse(line: &str) -> UiCommand {
    let line = line.trim();
    if line.is_empty() {
        return UiCommand::Nothing;
    }
    if !line.starts_with(':') {
        return UiCommand::Search(line.to_string());
    }

    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or(line);
    match command {
        ":refresh" | ":r" => UiCommand::Refresh,
        ":save" | ":s" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(index) if index >= 1 => UiCommand::Toggle(index),
            _ => UiCommand::Unknown(line.to_string()),
        },
        ":watchlist" | ":w" => UiCommand::ShowWatchlist,
        ":clear" => UiCommand::Clear,
        ":help" | ":h" => UiCommand::Help,
        ":quit" | ":q" => UiCommand::Quit,
        _ => UiCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_is_a_search() {
        assert_eq!(
            parse("  blade runner "),
            UiCommand::Search("blade runner".to_string())
        );
    }

    #[test]
    fn empty_line_is_nothing() {
        assert_eq!(parse("   "), UiCommand::Nothing);
    }

    #[test]
    fn save_takes_a_one_based_index() {
        assert_eq!(parse(":save 3"), UiCommand::Toggle(3));
        assert_eq!(parse(":s 1"), UiCommand::Toggle(1));
        assert_eq!(parse(":save 0"), UiCommand::Unknown(":save 0".to_string()));
        assert_eq!(parse(":save x"), UiCommand::Unknown(":save x".to_string()));
    }

    #[test]
    fn colon_commands_parse() {
        assert_eq!(parse(":refresh"), UiCommand::Refresh);
        assert_eq!(parse(":watchlist"), UiCommand::ShowWatchlist);
        assert_eq!(parse(":clear"), UiCommand::Clear);
        assert_eq!(parse(":quit"), UiCommand::Quit);
        assert_eq!(parse(":bogus"), UiCommand::Unknown(":bogus".to_string()));
    }
}
