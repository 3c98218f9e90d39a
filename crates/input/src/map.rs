//! Key mapping from raw characters to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Direction, GameAction, RotationDirection, QUIT_KEY};

/// Map a key character to a falling-block action.
///
/// `q` left, `d` right, `z` rotate counter-clockwise, `s` rotate clockwise,
/// space hard drop, `e` quit. Anything else is ignored.
pub fn action_for_key(c: char) -> Option<GameAction> {
    match c {
        'q' => Some(GameAction::MoveLeft),
        'd' => Some(GameAction::MoveRight),
        'z' => Some(GameAction::Rotate(RotationDirection::CounterClockwise)),
        's' => Some(GameAction::Rotate(RotationDirection::Clockwise)),
        ' ' => Some(GameAction::HardDrop),
        QUIT_KEY => Some(GameAction::Quit),
        _ => None,
    }
}

/// Map a key character to a dodge game step (`z`/`s`/`q`/`d`).
pub fn direction_for_key(c: char) -> Option<Direction> {
    match c {
        'z' => Some(Direction::Up),
        's' => Some(Direction::Down),
        'q' => Some(Direction::Left),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn is_quit_key(c: char) -> bool {
    c == QUIT_KEY
}

/// Reduce a terminal key event to the character the games read.
///
/// Raw mode swallows SIGINT, so Ctrl-C and Esc are delivered as the quit key.
/// Releases, repeats and non-character keys yield `None`.
pub fn key_event_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(QUIT_KEY),
        KeyCode::Esc => Some(QUIT_KEY),
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}
