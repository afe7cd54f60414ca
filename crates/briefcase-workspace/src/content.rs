// ABOUTME: In-memory store of rich-text content keyed by document id
// ABOUTME: Local only; unknown ids read back as the default empty document

use briefcase_types::{ContentTree, DocumentId};
use std::collections::HashMap;

/// Holds the current content tree of each document
#[derive(Debug, Clone, Default)]
pub struct DocumentContentStore {
    contents: HashMap<DocumentId, ContentTree>,
}

impl DocumentContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content for `id`, or a single empty paragraph if none was recorded
    pub fn get(&self, id: &DocumentId) -> ContentTree {
        self.contents.get(id).cloned().unwrap_or_default()
    }

    /// Borrow the stored content without falling back to the default
    pub fn peek(&self, id: &DocumentId) -> Option<&ContentTree> {
        self.contents.get(id)
    }

    /// Replace the stored content. Returns the previous value, if any.
    pub fn set(&mut self, id: DocumentId, content: ContentTree) -> Option<ContentTree> {
        self.contents.insert(id, content)
    }

    /// Store `content` only if nothing is recorded yet. Returns true if inserted.
    pub fn ensure(&mut self, id: &DocumentId, content: ContentTree) -> bool {
        if self.contents.contains_key(id) {
            return false;
        }
        self.contents.insert(id.clone(), content);
        true
    }

    pub fn remove(&mut self, id: &DocumentId) -> Option<ContentTree> {
        self.contents.remove(id)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.contents.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
