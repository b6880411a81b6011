// Logging setup.
// The terminal UI owns stdout, so interactive sessions log to a rolling file.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{CourseError, Result};

/// Environment variable holding the log filter, e.g. `coursenav=debug`.
pub const LOG_ENV: &str = "COURSENAV_LOG";
const LOG_FILE_NAME: &str = "coursenav.log";

/// Filter from `COURSENAV_LOG`, then `RUST_LOG`, then `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a daily rolling file in `dir`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the background writer.
pub fn init_file(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| CourseError::Other(e.to_string()))?;

    Ok(guard)
}

/// Log to stderr, for commands that print their result to stdout.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CourseError::Other(e.to_string()))
}
