//! Logging initialization for host applications.
//!
//! The core itself only emits `tracing` events; wiring them to an output is
//! the embedding application's choice. This module offers a ready-made
//! subscriber setup (plain text or JSON lines, filtered by `RUST_LOG`) for
//! hosts that do not bring their own.

use crate::constants;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format for the built-in subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            constants::LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            constants::LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG` when set, otherwise the default level.
/// Installing a second subscriber is a no-op, so hosts that already
/// initialized their own logging can call this safely.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL));

    let result = match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };

    // A subscriber installed earlier wins.
    let _ = result;
}
