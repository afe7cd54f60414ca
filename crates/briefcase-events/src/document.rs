// ABOUTME: Document domain events for content changes
// ABOUTME: Emitted on every local edit pushed by the editing surface

use briefcase_types::DocumentId;

/// Document domain events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Stored content was replaced
    ContentChanged { doc_id: DocumentId, block_count: usize },

    /// Stored content was discarded because the document's tab closed
    ContentDropped { doc_id: DocumentId },
}
