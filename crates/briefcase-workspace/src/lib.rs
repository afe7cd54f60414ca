// ABOUTME: Workspace layer: open tabs, per-document content, side panels and panes
// ABOUTME: All state is local and in-memory; changes are published on the event bus

pub mod assistant;
pub mod content;
pub mod editing;
pub mod error;
pub mod file_browser;
pub mod notification;
pub mod panels;
pub mod session;
pub mod workspace;

pub use assistant::AssistantPanel;
pub use content::DocumentContentStore;
pub use editing::{EditingSurface, HeadlessSurface};
pub use error::{ReferenceKind, Result, WorkspaceError};
pub use file_browser::FileBrowser;
pub use notification::{Notification, NotificationLevel, Notifications};
pub use panels::{PanelConstraints, PanelController};
pub use session::{CloseOutcome, OpenOutcome, TabSession};
pub use workspace::Workspace;
