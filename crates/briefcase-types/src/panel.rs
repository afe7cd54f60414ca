// ABOUTME: Identifiers for the collapsible side panels and the left sidebar tabs
// ABOUTME: Closed enums so callers cannot name a panel that does not exist

use serde::{Deserialize, Serialize};
use std::fmt;

/// A collapsible side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    /// File browser, knowledge base and settings
    Left,
    /// Document assistant
    Right,
}

impl PanelSide {
    pub const ALL: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];
}

impl fmt::Display for PanelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelSide::Left => f.write_str("left"),
            PanelSide::Right => f.write_str("right"),
        }
    }
}

/// Tabs of the left sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeftTab {
    #[default]
    Files,
    Knowledge,
    Settings,
}

impl LeftTab {
    pub const ALL: [LeftTab; 3] = [LeftTab::Files, LeftTab::Knowledge, LeftTab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            LeftTab::Files => "files",
            LeftTab::Knowledge => "knowledge",
            LeftTab::Settings => "settings",
        }
    }
}
