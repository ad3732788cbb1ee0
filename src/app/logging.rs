//! Logger setup
//!
//! The UI owns the terminal, so interactive sessions only log when a log
//! file is configured. Non-interactive modes log to stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Env, Target};

/// Environment variable holding the log filter (e.g. `PETVIEW_LOG=debug`)
pub const LOG_ENV: &str = "PETVIEW_LOG";

/// Install the global logger
///
/// Returns false when logging stays disabled.
pub fn init_logging(log_file: Option<&Path>, interactive: bool) -> anyhow::Result<bool> {
    let (default_filter, target) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            ("info", Target::Pipe(Box::new(file)))
        }
        None if interactive => return Ok(false),
        None => ("warn", Target::Stderr),
    };

    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .target(target)
        .try_init()?;
    Ok(true)
}
