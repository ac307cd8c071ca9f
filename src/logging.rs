//! Log setup
//!
//! While the TUI runs it owns the terminal, so events are only written when
//! a log file is given, or to stderr in `--print` mode. Without either no
//! subscriber is installed and `tracing` events are discarded.

use crate::config::Config;
use crate::error::{AppError, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "parentrace=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for this run, if any output is wanted.
pub fn init(config: &Config) -> Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path).map_err(|source| AppError::Logging {
            path: path.clone(),
            source,
        })?;
        // A subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    } else if config.print_only {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}
