// ABOUTME: Workspace domain events for tabs, panels and sidebar navigation
// ABOUTME: Immutable facts about what has already happened

use briefcase_types::{DocumentId, LeftTab, PanelSide};

/// Workspace domain events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new tab was appended to the tab strip
    TabOpened { doc_id: DocumentId, title: String },

    /// The active tab changed
    TabSwitched {
        previous: Option<DocumentId>,
        current: Option<DocumentId>,
    },

    /// A tab was removed from the tab strip
    TabClosed {
        doc_id: DocumentId,
        was_active: bool,
    },

    /// A side panel was collapsed or expanded
    PanelToggled { side: PanelSide, collapsed: bool },

    /// The left sidebar switched tabs
    LeftTabSelected { tab: LeftTab },
}
