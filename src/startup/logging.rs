//! Logging setup.
//!
//! The TUI owns stdout, so log output goes to a file. The filter comes from
//! `BOOKPEDIA_LOG` (e.g. `BOOKPEDIA_LOG=bookpedia=debug`), defaulting to `info`.

use std::io;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::error::BookpediaResult;

pub const ENV_LOG_FILTER: &str = "BOOKPEDIA_LOG";

/// Install a global subscriber appending to `path`.
///
/// Creates parent directories as needed. Calling it again after a
/// subscriber is installed leaves the first one in place.
pub fn init_logging(path: &Path) -> BookpediaResult<()> {
    let appender = file_appender(path)?;

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Bookpedia {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
    Ok(())
}

/// A single, never-rotated log file at exactly `path`.
fn file_appender(path: &Path) -> BookpediaResult<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(io::Error::other)?;
    Ok(appender)
}
