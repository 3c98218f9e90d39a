//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Views render
//! into a simple framebuffer (pure, testable) which `TerminalRenderer` then
//! flushes to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every terminal side effect behind `TerminalRenderer`/`TerminalSession`
//! - Render board cells 2 chars wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_arcade_core as core;
pub use term_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Tint};
pub use game_view::{DodgeView, GameView, EMPTY_GLYPH, FILLED_GLYPH};
pub use renderer::{RecordingSink, RenderSink, TerminalRenderer, TerminalSession, TerminalSink};
