//! Logging setup for applications embedding the hub.
//!
//! The hub itself only emits `tracing` events; installing a subscriber is
//! the host's choice. This module offers a small configurable default.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use.
    pub level: Level,
    /// Whether to emit JSON-formatted output.
    pub json: bool,
    /// Whether to log span lifecycle events.
    pub log_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: Level::INFO,
            json: false,
            log_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Create a configuration with the given level.
    pub fn new(level: Level) -> Self {
        LoggingConfig {
            level,
            ..Default::default()
        }
    }

    /// Enable JSON formatting.
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Enable span lifecycle logging.
    pub fn with_spans(mut self) -> Self {
        self.log_spans = true;
        self
    }
}

/// Install a global log subscriber with the provided configuration.
///
/// Fails with [`Error::Config`] when a subscriber is already installed.
pub fn setup_logging(config: LoggingConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(config.level.into());

    let span_events = if config.log_spans {
        FmtSpan::ACTIVE
    } else {
        FmtSpan::NONE
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(span_events);

    if config.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| Error::Config(format!("failed to install log subscriber: {}", e)))
}

/// Parse a log level from a string.
pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level).map_err(|_| Error::Config(format!("invalid log level: {}", level)))
}
