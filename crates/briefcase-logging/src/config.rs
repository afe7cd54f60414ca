// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and file path configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::Level;
use tracing::level_filters::LevelFilter;

/// Wrapper for a level filter that implements Serialize/Deserialize.
/// Unlike a plain `Level` it can also switch a target `off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_log_level(&s)
            .map(LogLevel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(LevelFilter::from_level(level))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

/// Main configuration structure for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level
    pub level: LogLevel,

    /// Per-target log level overrides, e.g. `briefcase_settings = debug`
    #[serde(default)]
    pub module_levels: BTreeMap<String, LogLevel>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub file: FileConfig,
}

/// Which sinks receive log records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub console: bool,
    pub file: bool,
    /// Emit JSON lines on stderr instead of human-readable console output
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Log file path; a date suffix is appended by the daily roller
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(LevelFilter::INFO),
            module_levels: BTreeMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: true,
            json: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Default configuration with process environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides read through `lookup`.
    ///
    /// `BRIEFCASE_LOG` takes precedence over `RUST_LOG`; both accept the
    /// `level,target=level` directive syntax.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(directives) = lookup("BRIEFCASE_LOG") {
            self.parse_directives(&directives)
                .context("Invalid BRIEFCASE_LOG value")?;
        } else if let Some(directives) = lookup("RUST_LOG") {
            self.parse_directives(&directives)
                .context("Invalid RUST_LOG value")?;
        }

        if lookup("BRIEFCASE_LOG_JSON").is_some() {
            self.output.json = true;
        }

        if lookup("BRIEFCASE_LOG_NO_CONSOLE").is_some() {
            self.output.console = false;
        }

        if lookup("BRIEFCASE_LOG_NO_FILE").is_some() {
            self.output.file = false;
        }

        Ok(())
    }

    fn parse_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',').map(str::trim) {
            if directive.is_empty() {
                continue;
            }

            if let Some((module, level_str)) = directive.split_once('=') {
                let level = parse_log_level(level_str).with_context(|| {
                    format!("Invalid log level '{level_str}' for module '{module}'")
                })?;
                self.module_levels
                    .insert(module.trim().to_string(), LogLevel(level));
            } else {
                self.level = LogLevel(
                    parse_log_level(directive)
                        .with_context(|| format!("Invalid global log level '{directive}'"))?,
                );
            }
        }
        Ok(())
    }
}

/// Get the default log file path: <config dir>/briefcase/briefcase.log
fn default_log_file_path() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("briefcase").join("briefcase.log"),
        None => PathBuf::from("briefcase.log"),
    }
}

/// Parse a log level string (case-insensitive).
pub(crate) fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    match level_str.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: off, trace, debug, info, warn, error",
            level_str
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level.0, LevelFilter::INFO);
        assert!(config.output.console);
        assert!(config.output.file);
        assert!(!config.output.json);
        assert!(config.file.path.to_string_lossy().contains("briefcase.log"));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_log_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("Warning").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_log_level("OFF").unwrap(), LevelFilter::OFF);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_briefcase_log_takes_precedence() {
        let mut config = LoggingConfig::default();
        config
            .apply_env_overrides(env(&[("BRIEFCASE_LOG", "debug"), ("RUST_LOG", "error")]))
            .unwrap();
        assert_eq!(config.level.0, LevelFilter::DEBUG);
    }

    #[test]
    fn test_module_directives() {
        let mut config = LoggingConfig::default();
        config
            .apply_env_overrides(env(&[(
                "RUST_LOG",
                "warn, briefcase_settings=trace,briefcase_workspace=debug",
            )]))
            .unwrap();
        assert_eq!(config.level.0, LevelFilter::WARN);
        assert_eq!(
            config.module_levels.get("briefcase_settings"),
            Some(&LogLevel(LevelFilter::TRACE))
        );
        assert_eq!(
            config.module_levels.get("briefcase_workspace"),
            Some(&LogLevel(LevelFilter::DEBUG))
        );
    }

    #[test]
    fn test_off_directives_are_accepted() {
        let mut config = LoggingConfig::default();
        config
            .apply_env_overrides(env(&[("RUST_LOG", "info,hyper=off")]))
            .unwrap();
        assert_eq!(config.level.0, LevelFilter::INFO);
        assert_eq!(
            config.module_levels.get("hyper"),
            Some(&LogLevel(LevelFilter::OFF))
        );

        config
            .apply_env_overrides(env(&[("BRIEFCASE_LOG", "off")]))
            .unwrap();
        assert_eq!(config.level.0, LevelFilter::OFF);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let config = LoggingConfig {
            level: LogLevel::from(Level::WARN),
            ..Default::default()
        };
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("level = \"warn\""), "rendered: {rendered}");
    }

    #[test]
    fn test_output_switches() {
        let mut config = LoggingConfig::default();
        config
            .apply_env_overrides(env(&[
                ("BRIEFCASE_LOG_JSON", "1"),
                ("BRIEFCASE_LOG_NO_FILE", "1"),
            ]))
            .unwrap();
        assert!(config.output.json);
        assert!(!config.output.file);
        assert!(config.output.console);
    }

    #[test]
    fn test_invalid_directive_is_error() {
        let mut config = LoggingConfig::default();
        let result = config.apply_env_overrides(env(&[("BRIEFCASE_LOG", "briefcase=loud")]));
        assert!(result.is_err());
    }
}
