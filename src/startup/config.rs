//! Startup configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BookpediaError, BookpediaResult};

/// Environment variable naming a book JSON file
pub const ENV_BOOK: &str = "BOOKPEDIA_BOOK";

/// Environment variable naming a string table JSON file
pub const ENV_STRINGS: &str = "BOOKPEDIA_STRINGS";

pub const USAGE: &str = "\
Usage: bookpedia [OPTIONS]

Options:
  --book <PATH>                 Book JSON to show (default: built-in sample)
  --strings <PATH>              String table JSON overriding display text
  --log <PATH>                  Log file (default: <cache dir>/bookpedia/bookpedia.log)
  --favorite                    Start with the book marked as favorite
  --description-delay-ms <MS>   Simulated description fetch delay (default: 600)
  -V, --version                 Print version
  -h, --help                    Print this help

Environment:
  BOOKPEDIA_BOOK, BOOKPEDIA_STRINGS   Defaults for --book and --strings
  BOOKPEDIA_LOG                       Log filter (default: info)";

/// Configuration for a detail screen session.
///
/// ```
/// use bookpedia::startup::StartupConfig;
///
/// let config = StartupConfig::default().with_favorite(true);
/// assert!(config.start_favorite);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Book JSON file; `None` shows the built-in sample
    pub book_path: Option<PathBuf>,
    /// String table overrides
    pub strings_path: Option<PathBuf>,
    /// Log file; `None` uses the cache directory default
    pub log_path: Option<PathBuf>,
    pub start_favorite: bool,
    /// How long the simulated description fetch takes
    pub description_delay: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            book_path: None,
            strings_path: None,
            log_path: None,
            start_favorite: false,
            description_delay: Duration::from_millis(600),
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.book_path = Some(path.into());
        self
    }

    pub fn with_strings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.strings_path = Some(path.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.start_favorite = favorite;
        self
    }

    pub fn with_description_delay(mut self, delay: Duration) -> Self {
        self.description_delay = delay;
        self
    }

    /// Fill unset paths from environment variables.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.book_path.is_none() {
            self.book_path = lookup(ENV_BOOK).map(PathBuf::from);
        }
        if self.strings_path.is_none() {
            self.strings_path = lookup(ENV_STRINGS).map(PathBuf::from);
        }
        self
    }

    /// Log file to use, falling back to the platform cache directory.
    pub fn resolved_log_path(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("bookpedia")
                .join("bookpedia.log")
        })
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    Run(StartupConfig),
}

/// Parse command-line arguments. The first item is the program name.
///
/// ```
/// use bookpedia::startup::{parse_args, CliCommand};
///
/// let args = vec!["bookpedia".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> BookpediaResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut config = StartupConfig::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--book" => config.book_path = Some(PathBuf::from(value(&arg, args.next())?)),
            "--strings" => config.strings_path = Some(PathBuf::from(value(&arg, args.next())?)),
            "--log" => config.log_path = Some(PathBuf::from(value(&arg, args.next())?)),
            "--favorite" => config.start_favorite = true,
            "--description-delay-ms" => {
                let raw = value(&arg, args.next())?;
                let ms: u64 = raw.parse().map_err(|_| {
                    BookpediaError::invalid_argument(&arg, format!("'{}' is not a number", raw))
                })?;
                config.description_delay = Duration::from_millis(ms);
            }
            other => {
                return Err(BookpediaError::invalid_argument(
                    other,
                    "unknown option",
                ))
            }
        }
    }

    Ok(CliCommand::Run(config))
}

fn value(flag: &str, next: Option<String>) -> BookpediaResult<String> {
    next.ok_or_else(|| BookpediaError::invalid_argument(flag, "missing value"))
}
