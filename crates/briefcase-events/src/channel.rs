// ABOUTME: Channel-backed EventBus that forwards every event to a single receiver
// ABOUTME: The application shell drains the receiver and routes events to handlers

use tokio::sync::mpsc;

use crate::event_bus::{EventBus, EventHandler};
use crate::{document, settings, workspace};

/// Any domain event, tagged with its bounded context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Workspace(workspace::Event),
    Document(document::Event),
    Settings(settings::Event),
}

impl AppEvent {
    /// Route this event to the matching handler method
    pub fn dispatch_to(&self, handler: &mut dyn EventHandler) {
        match self {
            AppEvent::Workspace(event) => handler.handle_workspace(event),
            AppEvent::Document(event) => handler.handle_document(event),
            AppEvent::Settings(event) => handler.handle_settings(event),
        }
    }
}

/// EventBus that sends events over an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelEventBus {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChannelEventBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: AppEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("Event receiver dropped, discarding event");
        }
    }
}

impl EventBus for ChannelEventBus {
    fn dispatch_workspace(&self, event: workspace::Event) {
        self.send(AppEvent::Workspace(event));
    }

    fn dispatch_document(&self, event: document::Event) {
        self.send(AppEvent::Document(event));
    }

    fn dispatch_settings(&self, event: settings::Event) {
        self.send(AppEvent::Settings(event));
    }
}

/// EventBus that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventBus;

impl EventBus for NoopEventBus {
    fn dispatch_workspace(&self, _event: workspace::Event) {}

    fn dispatch_document(&self, _event: document::Event) {}

    fn dispatch_settings(&self, _event: settings::Event) {}
}
