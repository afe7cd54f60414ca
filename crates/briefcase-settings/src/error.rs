// ABOUTME: Error types for loading, editing and saving settings
// ABOUTME: Separates remote failures from local rejections such as validation or busy state

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// The two kinds of request the store issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Load,
    Save,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Load => f.write_str("load"),
            RequestKind::Save => f.write_str("save"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error("Settings endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed settings payload: {reason}")]
    Decode { reason: String },

    #[error("Invalid {field} {value}: {reason}")]
    Validation {
        field: &'static str,
        value: u32,
        reason: String,
    },

    #[error("A settings {in_flight} is already in progress")]
    Busy { in_flight: RequestKind },

    #[error("Settings have not been loaded")]
    NotLoaded,

    #[error("Settings request cancelled")]
    Cancelled,
}

impl SettingsError {
    pub fn network<S: Into<String>>(reason: S) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    pub fn decode<S: Into<String>>(reason: S) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    pub fn validation<S: Into<String>>(field: &'static str, value: u32, reason: S) -> Self {
        Self::Validation {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// True for failures reported by or on the way to the remote endpoint
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

impl From<reqwest::Error> for SettingsError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            Self::decode(error.to_string())
        } else {
            Self::network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_grouping() {
        assert!(SettingsError::network("connection refused").is_network_failure());
        assert!(SettingsError::Status { status: 503 }.is_network_failure());
        assert!(SettingsError::decode("missing field").is_network_failure());

        assert!(!SettingsError::NotLoaded.is_network_failure());
        assert!(!SettingsError::Cancelled.is_network_failure());
        assert!(
            !SettingsError::Busy {
                in_flight: RequestKind::Save
            }
            .is_network_failure()
        );
    }

    #[test]
    fn test_messages() {
        let error = SettingsError::validation("resized_height", 30, "must be a multiple of 28");
        assert_eq!(
            error.to_string(),
            "Invalid resized_height 30: must be a multiple of 28"
        );
        assert_eq!(
            SettingsError::Busy {
                in_flight: RequestKind::Load
            }
            .to_string(),
            "A settings load is already in progress"
        );
    }
}
