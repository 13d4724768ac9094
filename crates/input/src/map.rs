//! Key mapping from terminal events to front end actions.

use crate::types::{Direction, UiAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to front end actions.
///
/// Key releases map to nothing so that terminals reporting them do not
/// double every move.
pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiAction::Cursor(Direction::Up))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiAction::Cursor(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiAction::Cursor(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiAction::Cursor(Direction::Left))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Select),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
