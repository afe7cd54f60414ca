// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console, JSON and file layers under one EnvFilter

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{
    BoxedLayer, create_console_layer, create_env_filter, create_file_layer, create_json_layer,
};

/// Keeps the non-blocking file writer alive. Dropping it flushes the file sink.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let (layers, file_guard) = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    log_initialized(&config);

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Sinks selected by `config.output`, plus the file writer guard when file output is on.
pub(crate) fn build_layers(
    config: &LoggingConfig,
) -> Result<(Vec<BoxedLayer>, Option<WorkerGuard>)> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.extend(create_console_layer(&config.output));
    layers.extend(create_json_layer(&config.output));

    let file_guard = if config.output.file {
        let (layer, guard) =
            create_file_layer(&config.file).context("Failed to set up file logging")?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    Ok((layers, file_guard))
}

pub(crate) fn log_initialized(config: &LoggingConfig) {
    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Briefcase logging initialized"
    );
}
