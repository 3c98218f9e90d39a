//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of both terminal games. It has **no
//! dependencies** on terminals or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is a plain function over owned state
//! - **Total**: invalid moves and turns are rejected as no-ops, never errors
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid with fixing and line clearing
//! - [`pieces`]: 4x4 tetromino matrices, validity checking and rotation
//! - [`game_state`]: active piece lifecycle, gravity and scoring
//! - [`rng`]: seeded LCG for uniform piece and fruit selection
//! - [`scoring`]: flat per-row line clear scoring
//! - [`dodge`]: the dodge/chase grid game
//!
//! # Example
//!
//! ```
//! use term_arcade_core::{GameState, TickOutcome};
//! use term_arcade_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece locks on the next gravity tick.
//! assert!(matches!(game.gravity_tick(), TickOutcome::Locked { .. }));
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod dodge;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use term_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use dodge::{Arena, DodgeEvent, DodgeGame, Entity};
pub use game_state::{GameState, TickOutcome};
pub use pieces::{is_valid, spawn_position, try_rotate, Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
