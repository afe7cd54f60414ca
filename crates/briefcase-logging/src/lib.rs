// ABOUTME: Public API for briefcase logging infrastructure using tokio-tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{FileConfig, LogLevel, LoggingConfig, OutputConfig};
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Initialize logging with the default configuration plus environment overrides.
pub fn init_logging() -> Result<LoggingGuard> {
    init_subscriber(LoggingConfig::from_env()?)
}

/// Initialize logging with a custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}
