//! Key mapping from terminal events to input symbols.
//!
//! The session consumes single characters. Arrow keys are folded into the
//! final byte of their escape sequence (`C`, `D`, `B`), printable keys pass
//! through unchanged and Ctrl-D / Ctrl-C become the abort symbol.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{SYMBOL_ABORT, SYMBOL_DOWN, SYMBOL_LEFT, SYMBOL_RIGHT};

/// Map one key event to the symbol it stands for.
///
/// Releases produce nothing; terminal auto-repeat counts as a key press.
pub fn key_to_symbol(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') | KeyCode::Char('C') | KeyCode::Char('D')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(SYMBOL_ABORT)
        }
        KeyCode::Left => Some(SYMBOL_LEFT),
        KeyCode::Right => Some(SYMBOL_RIGHT),
        KeyCode::Down => Some(SYMBOL_DOWN),
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Esc => Some('\x1b'),
        _ => None,
    }
}
