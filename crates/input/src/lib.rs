//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps raw key characters
//! into [`crate::types::GameAction`] / [`crate::types::Direction`] and provides
//! the non-blocking [`KeySource`] the game loop polls.

pub mod map;
pub mod source;

pub use term_arcade_types as types;

pub use map::{action_for_key, direction_for_key, is_quit_key, key_event_char};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
