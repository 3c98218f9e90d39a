//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! from the core rules, the terminal views and the game loop alike.
//!
//! # Board Dimensions
//!
//! The falling-block playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Gravity interval (one row per tick) |
//! | `POLL_MS` | 10 | Input poll interval of the game loop |
//! | `DODGE_STEP_DELAY_MS` | 150 | Pause after each dodge turn |
//!
//! # Examples
//!
//! ```
//! use term_arcade_types::{GameAction, PieceKind, RotationDirection, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.as_str(), "t");
//!
//! let action = GameAction::Rotate(RotationDirection::Clockwise);
//! assert_eq!(action.as_str(), "rotateCw");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Side length of the square matrix every piece shape lives in
pub const SHAPE_SIZE: usize = 4;

/// Gravity interval in milliseconds
pub const TICK_MS: u64 = 500;

/// Game loop poll interval in milliseconds (100 Hz)
pub const POLL_MS: u64 = 10;

/// Pause after each dodge game turn in milliseconds
pub const DODGE_STEP_DELAY_MS: u64 = 150;

/// Key that quits either game
pub const QUIT_KEY: char = 'e';

/// A cell on the falling-block board: `true` when occupied.
pub type Cell = bool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_and_timing_defaults() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(TICK_MS, 500);
        assert_eq!(POLL_MS, 10);
        assert_eq!(DODGE_STEP_DELAY_MS, 150);
    }

    #[test]
    fn test_every_piece_kind_round_trips_through_its_index() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(PieceKind::from_index(i), Some(*kind));
            assert_eq!(kind.index(), i);
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
        assert_eq!(GameAction::MoveRight.as_str(), "moveRight");
        assert_eq!(
            GameAction::Rotate(RotationDirection::CounterClockwise).as_str(),
            "rotateCcw"
        );
        assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
        assert_eq!(GameAction::Quit.as_str(), "quit");
    }

    #[test]
    fn test_direction_deltas_grow_downward() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}

/// The seven tetromino piece kinds
///
/// The order matches the shape table in the core crate; spawning draws an
/// index uniformly from `0..7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of distinct kinds
    pub const COUNT: usize = 7;

    /// Kind at a table index
    ///
    /// ```
    /// use term_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Direction of a quarter turn applied to a piece matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Actions the falling-block game loop understands
///
/// Every action except `Quit` is applied through the core game state; `Quit`
/// ends the loop before any further work is done in that iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Quarter turn in place (no wall kicks)
    Rotate(RotationDirection),
    /// Instantly drop piece to lowest valid row
    HardDrop,
    /// End the session
    Quit,
}

impl GameAction {
    /// Convert to camelCase string (used in the game loop log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate(RotationDirection::Clockwise) => "rotateCw",
            GameAction::Rotate(RotationDirection::CounterClockwise) => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Quit => "quit",
        }
    }
}

/// Session status shared by both games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Grid step used by the dodge game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) of a single step; y grows downward
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
