// ABOUTME: Briefcase application shell: app state, argument parsing and view composition
// ABOUTME: The binary in main.rs wires these to logging, configuration and the runtime

pub mod app;
pub mod args;
pub mod view;

pub use app::{App, NotificationRouter};
pub use args::Args;
pub use view::{WorkspaceView, compose, render_text};
