// ABOUTME: reqwest implementation of the settings backend
// ABOUTME: GET and PUT on {api_url}/api/settings with a JSON body

use async_trait::async_trait;
use briefcase_types::Settings;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::backend::SettingsBackend;
use crate::config::ClientConfig;
use crate::error::{Result, SettingsError};

#[derive(Debug, Clone)]
pub struct HttpSettingsBackend {
    client: Client,
    url: String,
}

impl HttpSettingsBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.settings_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SettingsBackend for HttpSettingsBackend {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Settings> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SettingsError::Status {
                status: status.as_u16(),
            });
        }

        let settings = response.json::<Settings>().await?;
        debug!(?settings, "Fetched settings");
        Ok(settings)
    }

    #[instrument(skip(self, settings), fields(url = %self.url))]
    async fn store(&self, settings: &Settings) -> Result<()> {
        let response = self.client.put(&self.url).json(settings).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SettingsError::Status {
                status: status.as_u16(),
            });
        }

        // The server echoes the record back; local values stay authoritative.
        debug!(%status, "Stored settings");
        Ok(())
    }
}
