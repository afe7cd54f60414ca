// ABOUTME: Layer constructors for the console, JSON and rolling-file sinks
// ABOUTME: Also builds the EnvFilter from the configured levels

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{FileConfig, LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Human-readable stderr layer; `None` when console output is off or JSON is selected.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console || config.json {
        return None;
    }

    Some(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed(),
    )
}

/// JSON lines on stderr for structured collection.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console || !config.json {
        return None;
    }

    Some(
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    )
}

/// Daily rolling file layer. The returned guard flushes pending records on drop
/// and must be kept alive for as long as logging is needed.
pub fn create_file_layer(config: &FileConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let directory = config
        .path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));

    fs::create_dir_all(directory).with_context(|| {
        format!("Failed to create log directory: {}", directory.display())
    })?;

    let file_name = config
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let file_appender = rolling::daily(directory, file_name);
    let (writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    Ok((layer, guard))
}

/// Build the filter from the global level plus per-target overrides.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(config.level.0.to_string());

    for (module, level) in &config.module_levels {
        let directive = format!("{}={}", module, level.0)
            .parse()
            .with_context(|| format!("Invalid filter directive for '{module}'"))?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}
