// ABOUTME: Application state: the workspace, the settings store and the event channel between them
// ABOUTME: Routes settings outcomes into user-visible notifications

use std::sync::Arc;

use briefcase_events::{AppEvent, ChannelEventBus, EventHandler, settings};
use briefcase_settings::{SettingsBackend, SettingsError, SettingsStore};
use briefcase_types::Settings;
use briefcase_workspace::{HeadlessSurface, Notifications, Workspace};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::view::{WorkspaceView, compose};

/// Turns settings events into notifications
pub struct NotificationRouter<'a> {
    notifications: &'a mut Notifications,
}

impl<'a> NotificationRouter<'a> {
    pub fn new(notifications: &'a mut Notifications) -> Self {
        Self { notifications }
    }
}

impl EventHandler for NotificationRouter<'_> {
    fn handle_settings(&mut self, event: &settings::Event) {
        if event.is_failure() {
            warn!(?event, "Settings request failed");
        }
        match event {
            settings::Event::LoadFailed { error } => {
                self.notifications
                    .error(format!("failed to load settings: {error}"));
            }
            settings::Event::SaveFailed { error } => {
                self.notifications
                    .error(format!("failed to save settings: {error}"));
            }
            settings::Event::Saved { .. } => {
                self.notifications.info("settings saved");
            }
            _ => {}
        }
    }
}

pub struct App {
    workspace: Workspace,
    settings: SettingsStore,
    events: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Seeded workspace plus a settings store over `backend`
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        let (bus, events) = ChannelEventBus::new();
        let bus = Arc::new(bus);
        let workspace = Workspace::with_sample_session(bus.clone(), Box::new(HeadlessSurface::new()));
        let settings = SettingsStore::new(backend, bus);

        Self {
            workspace,
            settings,
            events,
        }
    }

    /// Load settings once at startup. A failure is reported, not fatal.
    pub async fn start(&mut self) {
        match self.settings.load().await {
            Ok(settings) => info!(?settings, "Workspace ready"),
            Err(error) => warn!(%error, "Starting with default settings"),
        }
        self.process_events();
    }

    /// Save the current settings and report the outcome
    pub async fn save_settings(&mut self) -> Result<Settings, SettingsError> {
        let result = self.settings.save().await;
        if let Err(error) = &result {
            // Remote failures arrive as events; local rejections are reported here
            if !error.is_network_failure() && *error != SettingsError::Cancelled {
                self.workspace.notifications_mut().error(error.to_string());
            }
        }
        self.process_events();
        result
    }

    /// Drain pending events into the notification router. Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        let mut router = NotificationRouter::new(self.workspace.notifications_mut());
        while let Ok(event) = self.events.try_recv() {
            event.dispatch_to(&mut router);
            handled += 1;
        }
        if handled > 0 {
            debug!(handled, "Processed application events");
        }
        handled
    }

    pub fn view(&self) -> WorkspaceView {
        compose(&self.workspace, &self.settings.snapshot())
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Cancel outstanding requests
    pub fn shutdown(&self) {
        self.settings.shutdown();
    }
}
