//! Key mapping from terminal events to player commands.

use crate::types::FrogAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player commands.
pub fn handle_key_event(key: KeyEvent) -> Option<FrogAction> {
    if should_quit(key) {
        return Some(FrogAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(FrogAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(FrogAction::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(FrogAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(FrogAction::MoveRight),

        // Diagnostics
        KeyCode::Char('1') => Some(FrogAction::ToggleDebug),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl-C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
