//! Logging setup shared by Linklet binaries.

use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    #[default]
    #[value(name = "text")]
    Text,
    /// One JSON object per event.
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("global subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global `tracing` subscriber.
///
/// Can only succeed once per process.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))
}
