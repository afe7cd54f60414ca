// ABOUTME: Seam between the settings store and the remote settings resource
// ABOUTME: Implemented over HTTP in production and by in-memory fakes in tests

use async_trait::async_trait;
use briefcase_types::Settings;

use crate::error::Result;

/// Remote storage for the settings record
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Read the current settings
    async fn fetch(&self) -> Result<Settings>;

    /// Replace the stored settings with `settings`
    async fn store(&self, settings: &Settings) -> Result<()>;
}
