//! Key mapping from terminal events to game input.

use crate::types::{InputSignal, INTERRUPT_CHAR};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The character a key press stands for.
///
/// Raw mode reports Ctrl+C as a modified `c`; it is folded back into the
/// interrupt character so the game sees the same byte a tty would deliver.
pub fn key_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(INTERRUPT_CHAR)
        }
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}

/// Map a keyboard event to game input. Releases and repeats are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<InputSignal> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    key_char(key).and_then(InputSignal::from_char)
}
