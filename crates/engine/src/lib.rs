//! Game loop / scheduler.
//!
//! Drives the falling-block game in real time: a single-threaded cooperative
//! loop that polls input at 100 Hz and applies gravity every 500 ms. The loop
//! is generic over [`KeySource`](term_arcade_input::KeySource), [`Clock`] and
//! [`RenderSink`](term_arcade_term::RenderSink) so it runs against the real
//! terminal or against scripted fakes.
//!
//! # Example
//!
//! ```
//! use term_arcade_core::GameState;
//! use term_arcade_engine::{EngineConfig, ManualClock, Runner};
//! use term_arcade_input::ScriptedKeys;
//! use term_arcade_term::RecordingSink;
//!
//! let mut game = GameState::new(7);
//! let mut runner = Runner::new(
//!     EngineConfig::default(),
//!     ScriptedKeys::new(" e"),
//!     ManualClock::default(),
//!     RecordingSink::new(),
//! );
//!
//! let score = runner.run(&mut game).unwrap();
//! assert_eq!(score, 0);
//! assert!(game.is_over());
//! ```

pub mod clock;
pub mod config;
pub mod logging;
pub mod runner;

pub use term_arcade_core as core;
pub use term_arcade_input as input;
pub use term_arcade_term as term;
pub use term_arcade_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EngineConfig, RunConfig};
pub use logging::init_logging;
pub use runner::{Runner, StepReport};
