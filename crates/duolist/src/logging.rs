//! Log setup.
//!
//! The terminal is owned by the UI, so log lines go to a file through a
//! non-blocking writer. Keep the returned guard alive until exit or buffered
//! lines are lost.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Log;
use crate::error::Error;

/// Install the global subscriber described by `log`.
///
/// Returns `None` when no log file is configured; nothing is installed then.
///
/// # Errors
///
/// Fails on an invalid filter directive or when a global subscriber is
/// already set.
pub fn init(log: &Log) -> Result<Option<WorkerGuard>, Error> {
    let Some(path) = &log.file else {
        return Ok(None);
    };
    let filter = filter(&log.level)?;
    let (dir, file_name) = split_path(path);
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::LogInit(e.to_string()))?;
    Ok(Some(guard))
}

/// `RUST_LOG` when set, the configured directive otherwise.
fn filter(level: &str) -> Result<EnvFilter, Error> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

fn split_path(path: &Path) -> (&Path, &std::ffi::OsStr) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_else(|| "duolist.log".as_ref());
    (dir, file_name)
}
