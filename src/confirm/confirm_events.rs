//! Keyboard handling for the confirmation dialog

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press to an answer while a dialog is open
///
/// `y`/`Enter` confirm, `n`/`Esc` cancel. Anything else returns `None`; the
/// caller still swallows it because the dialog is modal.
pub fn answer_for_key(key: KeyEvent) -> Option<bool> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
        _ => None,
    }
}
