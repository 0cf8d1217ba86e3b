//! Structured logging setup.
//!
//! The TUI owns stdout, so log lines go to a file under the user's cache
//! directory (`lazyrates/lazyrates.log`). The filter comes from
//! `LAZYRATES_LOG`, then `--log-level`, then `info`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "LAZYRATES_LOG";

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE: &str = "lazyrates.log";

/// Path of the log file, creating its directory.
///
/// # Errors
/// Returns an error if the cache directory is unknown or cannot be created.
pub fn log_path() -> Result<PathBuf> {
    let mut path = dirs::cache_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine cache directory"))?;
    path.push("lazyrates");
    fs::create_dir_all(&path)?;
    path.push(LOG_FILE);
    Ok(path)
}

/// Builds the filter from the environment, falling back to `level`.
fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LEVEL)))
}

/// Installs the global subscriber writing to the log file.
///
/// # Errors
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(level: Option<&str>) -> Result<PathBuf> {
    let path = log_path()?;
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    tracing::info!("lazyrates v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(path)
}
