// ABOUTME: Error types for workspace state operations
// ABOUTME: Unknown ids are reported instead of being silently ignored

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// What kind of thing an id was supposed to name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Tab,
    Folder,
    File,
    Notification,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceKind::Tab => "tab",
            ReferenceKind::Folder => "folder",
            ReferenceKind::File => "file",
            ReferenceKind::Notification => "notification",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("Invalid reference: {kind} '{id}' does not exist")]
    InvalidReference { kind: ReferenceKind, id: String },
}

impl WorkspaceError {
    pub fn invalid_reference(kind: ReferenceKind, id: impl Into<String>) -> Self {
        Self::InvalidReference {
            kind,
            id: id.into(),
        }
    }

    pub fn tab_not_found(id: impl fmt::Display) -> Self {
        Self::invalid_reference(ReferenceKind::Tab, id.to_string())
    }
}
