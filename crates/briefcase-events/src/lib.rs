// ABOUTME: Cross-crate event definitions for decoupled communication
// ABOUTME: Domain events per bounded context plus the bus that carries them

pub mod channel;
pub mod document;
pub mod event_bus;
pub mod settings;
pub mod workspace;

pub use channel::{AppEvent, ChannelEventBus, NoopEventBus};
pub use event_bus::{EventBus, EventHandler};
