// ABOUTME: Tab handle referencing one open document
// ABOUTME: Title is captured at open time and not re-synced

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentId};

/// A tab in the editor tab strip. Its id is the id of the document it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: DocumentId,
    pub title: String,
}

impl Tab {
    pub fn new(id: impl Into<DocumentId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl From<&Document> for Tab {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id.clone(),
            title: document.title.clone(),
        }
    }
}
