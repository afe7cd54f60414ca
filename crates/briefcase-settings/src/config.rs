// ABOUTME: Client configuration for reaching the settings endpoint
// ABOUTME: Defaults, then briefcase.toml in the config directory, then environment variables

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONFIG_FILE_NAME: &str = "briefcase.toml";

/// Where and how to talk to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api/settings` suffix
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from the standard config directory and the process environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match config_dir() {
            Some(dir) => Self::load_from_dir(&dir)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load `briefcase.toml` from `dir`, falling back to defaults if it is absent
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply `API_URL` and `BRIEFCASE_REQUEST_TIMEOUT` from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("API_URL").filter(|url| !url.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("BRIEFCASE_REQUEST_TIMEOUT") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "Ignoring invalid BRIEFCASE_REQUEST_TIMEOUT"),
            }
        }
    }

    /// Full URL of the settings resource
    pub fn settings_url(&self) -> String {
        format!("{}/api/settings", self.api_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// `<config dir>/briefcase`
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("briefcase"))
}
