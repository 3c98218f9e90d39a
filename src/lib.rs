//! Terminal arcade (workspace facade crate).
//!
//! Re-exports the member crates under `term_arcade::{core,engine,input,term,types}`
//! so the binaries, integration tests and benches share one import path.

pub use term_arcade_core as core;
pub use term_arcade_engine as engine;
pub use term_arcade_input as input;
pub use term_arcade_term as term;
pub use term_arcade_types as types;
