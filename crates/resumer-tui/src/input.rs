use std::path::PathBuf;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// Map a crossterm terminal event to a TUI action.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Paste(text) => Action::Paste(text.clone()),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('g') => Action::GoTop,
        KeyCode::Char('G') => Action::GoBottom,
        KeyCode::Char('o') => Action::OpenPicker,
        KeyCode::Char('x') | KeyCode::Delete => Action::RemoveFile,
        KeyCode::Char('e') => Action::ShowExample,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('d') => Action::DownloadReport,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home => Action::GoTop,
        KeyCode::End => Action::GoBottom,
        _ => Action::None,
    }
}

/// Extract the first path from text a terminal pasted when files were
/// dropped onto it.
///
/// Terminals differ: some quote the path, some backslash-escape spaces,
/// some send `file://` URIs, and several files arrive space- or
/// newline-separated.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    let first = match text.chars().next()? {
        quote @ ('\'' | '"') => {
            let rest = &text[1..];
            let end = rest.find(quote)?;
            rest[..end].to_string()
        }
        _ => {
            let mut path = String::new();
            let mut chars = text.chars();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => match chars.next() {
                        Some(escaped) => path.push(escaped),
                        None => path.push('\\'),
                    },
                    c if c.is_whitespace() => break,
                    c => path.push(c),
                }
            }
            path
        }
    };

    let first = match first.strip_prefix("file://") {
        // File managers percent-encode URIs; plain paths are taken literally.
        Some(uri) => urlencoding::decode(uri)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| uri.to_string()),
        None => first,
    };
    if first.is_empty() {
        None
    } else {
        Some(PathBuf::from(first))
    }
}
