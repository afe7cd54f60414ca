// ABOUTME: Event bus and handler traits for decoupled communication
// ABOUTME: Provides publish-subscribe pattern for cross-crate events

use crate::{
    document::Event as DocumentEvent, settings::Event as SettingsEvent,
    workspace::Event as WorkspaceEvent,
};

/// Event bus trait for dispatching domain events
pub trait EventBus: Send + Sync {
    /// Dispatch a workspace event
    fn dispatch_workspace(&self, event: WorkspaceEvent);

    /// Dispatch a document event
    fn dispatch_document(&self, event: DocumentEvent);

    /// Dispatch a settings event
    fn dispatch_settings(&self, event: SettingsEvent);
}

/// Event handler trait for receiving domain events
pub trait EventHandler {
    /// Handle a workspace event
    fn handle_workspace(&mut self, _event: &WorkspaceEvent) {}

    /// Handle a document event
    fn handle_document(&mut self, _event: &DocumentEvent) {}

    /// Handle a settings event
    fn handle_settings(&mut self, _event: &SettingsEvent) {}
}
