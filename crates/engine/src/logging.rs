//! Optional file logging.
//!
//! The games own the terminal in raw mode, so log lines never go to stdout or
//! stderr. Logging is enabled only when a log path is configured, and then
//! goes to that file through `env_logger`'s pipe target.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::RunConfig;

/// Install the global logger if `config.log_path` is set.
///
/// `RUST_LOG` selects the filter; it defaults to `debug`.
/// Returns whether a logger was installed.
pub fn init_logging(config: &RunConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(true)
}
