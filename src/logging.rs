//! Logging utilities wrapping `tracing` initialisation
//!
//! Diagnostics go to stderr so stdout only ever carries the result line.

use crate::config::LoggingOptions;
use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Level filter implied by the number of `-v` flags, if any.
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the level filter: the `-v` count wins over the configured level.
pub fn env_filter(options: &LoggingOptions, verbose: u8) -> Result<EnvFilter> {
    let level = verbosity_level(verbose).unwrap_or(options.level.as_str());
    EnvFilter::try_new(level)
        .map_err(|e| Error::Config(format!("Invalid log level '{level}': {e}")))
}

/// Initialise the global tracing subscriber.
///
/// Subsequent calls are ignored.
pub fn init(options: &LoggingOptions, verbose: u8) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = env_filter(options, verbose)?;
    let stderr_layer = fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .with_ansi(options.color)
        .with_target(false)
        .with_level(true);

    Registry::default()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}
