//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Returns `None` for release events so each physical press ticks once on
/// terminals that report releases.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Key::Interrupt);
    }
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Key::Char(c))
        }
        _ => Some(Key::Other),
    }
}

/// Check if key should abort the session.
///
/// Raw mode swallows SIGINT, so Ctrl-C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
