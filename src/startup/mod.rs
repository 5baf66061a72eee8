//! Startup: command-line parsing, configuration and logging.
//!
//! - [`config`] - `StartupConfig` and `CliCommand` parsing
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::{parse_args, CliCommand, StartupConfig, USAGE};
pub use logging::init_logging;
