//! Loop timing and process configuration.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{POLL_MS, TICK_MS};

/// Timing of the fixed-tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity interval
    pub tick_interval_ms: u64,
    /// Sleep between input polls
    pub poll_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_MS,
            poll_interval_ms: POLL_MS,
        }
    }
}

/// Process-level settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// RNG seed for piece and fruit selection
    pub seed: u32,
    /// Log file; logging stays off when unset
    pub log_path: Option<String>,
}

impl RunConfig {
    /// Read configuration from environment variables
    ///
    /// - `TERM_ARCADE_SEED`: RNG seed (defaults to a time-derived seed)
    /// - `TERM_ARCADE_LOG_PATH`: log file path (blank disables logging)
    pub fn from_env() -> Self {
        let seed = env::var("TERM_ARCADE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let log_path = env::var("TERM_ARCADE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { seed, log_path }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
