// ABOUTME: Settings model and its remote synchronization
// ABOUTME: Load-on-start and explicit save against the /api/settings resource

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod validation;

pub use backend::SettingsBackend;
pub use config::ClientConfig;
pub use error::{RequestKind, Result, SettingsError};
pub use http::HttpSettingsBackend;
pub use store::{SettingsSnapshot, SettingsState, SettingsStore};
