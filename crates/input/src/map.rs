//! Key mapping from terminal events to camera moves.

use crate::types::MoveAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a camera move.
pub fn handle_key_event(key: KeyEvent) -> Option<MoveAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveAction::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveAction::Backward),

        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveAction::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveAction::TurnRight),

        KeyCode::Char('q') | KeyCode::Char('Q') => Some(MoveAction::StrafeLeft),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(MoveAction::StrafeRight),

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
