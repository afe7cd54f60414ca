// ABOUTME: Settings domain events for the load/save lifecycle
// ABOUTME: Failure events carry a message suitable for a user notification

use briefcase_types::Settings;

/// Settings domain events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadStarted,
    Loaded { settings: Settings },
    LoadFailed { error: String },
    SaveStarted { settings: Settings },
    Saved { settings: Settings },
    SaveFailed { error: String },
}

impl Event {
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::LoadFailed { .. } | Event::SaveFailed { .. })
    }
}
