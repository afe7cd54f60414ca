// ABOUTME: Tab session model: ordered open tabs and the active selection
// ABOUTME: Keeps tab ids unique and the active id pointing at an open tab

use briefcase_types::{Document, DocumentId, Tab};

use crate::error::{Result, WorkspaceError};

/// Outcome of [`TabSession::open`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was appended
    Inserted,
    /// A tab for the document already existed and was activated
    Activated,
}

/// Outcome of [`TabSession::close`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseOutcome {
    pub closed: Tab,
    pub was_active: bool,
    /// Active tab after the close
    pub active: Option<DocumentId>,
}

/// Ordered set of open tabs plus the active selection.
///
/// Invariants:
/// - tab ids are unique and insertion order is display order
/// - `active` is `None` exactly when there are no tabs, otherwise it names an open tab
#[derive(Debug, Clone, Default)]
pub struct TabSession {
    tabs: Vec<Tab>,
    active: Option<DocumentId>,
}

impl TabSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab for `document`, or activate the existing one.
    pub fn open(&mut self, document: &Document) -> OpenOutcome {
        let outcome = if self.contains(&document.id) {
            OpenOutcome::Activated
        } else {
            self.tabs.push(Tab::from(document));
            OpenOutcome::Inserted
        };
        self.active = Some(document.id.clone());
        outcome
    }

    /// Close the tab with `id`.
    ///
    /// When the active tab closes, the tab to its left becomes active; if it
    /// was leftmost, the new leftmost tab; if none remain, nothing is active.
    pub fn close(&mut self, id: &DocumentId) -> Result<CloseOutcome> {
        let index = self
            .position(id)
            .ok_or_else(|| WorkspaceError::tab_not_found(id))?;

        let closed = self.tabs.remove(index);
        let was_active = self.active.as_ref() == Some(id);

        if was_active {
            self.active = match index {
                _ if self.tabs.is_empty() => None,
                0 => Some(self.tabs[0].id.clone()),
                i => Some(self.tabs[i - 1].id.clone()),
            };
        }

        Ok(CloseOutcome {
            closed,
            was_active,
            active: self.active.clone(),
        })
    }

    /// Make the tab with `id` active. Returns the previously active id.
    pub fn set_active(&mut self, id: &DocumentId) -> Result<Option<DocumentId>> {
        if !self.contains(id) {
            return Err(WorkspaceError::tab_not_found(id));
        }
        Ok(self.active.replace(id.clone()))
    }

    /// Read-only snapshot of the open tabs in display order
    pub fn list(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let active = self.active.as_ref()?;
        self.tabs.iter().find(|tab| &tab.id == active)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &DocumentId) -> Option<usize> {
        self.tabs.iter().position(|tab| &tab.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
