// ABOUTME: Derives the three-pane layout from current workspace and settings state
// ABOUTME: Pure composition plus a deterministic plain-text renderer

use std::fmt;

use briefcase_settings::{SettingsSnapshot, SettingsState};
use briefcase_types::{DocumentId, Folder, GenerationModel, IndexerModel, LeftTab, Settings};
use briefcase_workspace::assistant::{GREETING, PLACEHOLDER};
use briefcase_workspace::{Notification, NotificationLevel, Workspace};

pub const APP_TITLE: &str = "briefcase";

/// Everything needed to draw one frame of the workspace
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceView {
    pub title: &'static str,
    pub left: LeftPaneView,
    pub editor: EditorView,
    pub assistant: AssistantView,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeftPaneView {
    pub collapsed: bool,
    pub selected: LeftTab,
    pub body: LeftPaneBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeftPaneBody {
    Files(Vec<Folder>),
    Knowledge,
    Settings(SettingsFormView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFormView {
    pub values: Settings,
    pub status: SettingsState,
    pub indexer_options: Vec<IndexerModel>,
    pub generation_options: Vec<GenerationModel>,
    /// Save is offered only when not busy and values have been loaded
    pub can_save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: DocumentId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocumentView {
    pub id: DocumentId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorView {
    pub tabs: Vec<TabView>,
    pub active: Option<ActiveDocumentView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantView {
    pub collapsed: bool,
    pub greeting: &'static str,
    pub transcript: Vec<String>,
    pub draft: String,
    pub placeholder: &'static str,
}

/// Build the view for the current state. Reads only; never mutates a store.
pub fn compose(workspace: &Workspace, settings: &SettingsSnapshot) -> WorkspaceView {
    let panels = workspace.panels();
    let selected = workspace.left_tab();

    let body = match selected {
        LeftTab::Files => LeftPaneBody::Files(workspace.files().folders().to_vec()),
        LeftTab::Knowledge => LeftPaneBody::Knowledge,
        LeftTab::Settings => LeftPaneBody::Settings(SettingsFormView {
            values: settings.values,
            status: settings.state.clone(),
            indexer_options: IndexerModel::ALL.to_vec(),
            generation_options: GenerationModel::ALL.to_vec(),
            can_save: settings.state.can_save(),
        }),
    };

    let session = workspace.session();
    let tabs = session
        .list()
        .iter()
        .map(|tab| TabView {
            id: tab.id.clone(),
            title: tab.title.clone(),
            active: session.active() == Some(&tab.id),
        })
        .collect();

    let active = session.active_tab().map(|tab| ActiveDocumentView {
        id: tab.id.clone(),
        title: tab.title.clone(),
        text: workspace.content(&tab.id).plain_text(),
    });

    let assistant = workspace.assistant();

    WorkspaceView {
        title: APP_TITLE,
        left: LeftPaneView {
            collapsed: panels.is_collapsed(briefcase_types::PanelSide::Left),
            selected,
            body,
        },
        editor: EditorView { tabs, active },
        assistant: AssistantView {
            collapsed: panels.is_collapsed(briefcase_types::PanelSide::Right),
            greeting: GREETING,
            transcript: assistant.transcript().to_vec(),
            draft: assistant.draft().to_string(),
            placeholder: PLACEHOLDER,
        },
        notifications: workspace.notifications().iter().cloned().collect(),
    }
}

/// Plain-text rendering used by the command-line shell
pub fn render_text(view: &WorkspaceView) -> String {
    view.to_string()
}

impl fmt::Display for WorkspaceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write!(f, "{}", self.left)?;
        writeln!(f)?;
        write!(f, "{}", self.editor)?;
        writeln!(f)?;
        write!(f, "{}", self.assistant)?;

        if !self.notifications.is_empty() {
            writeln!(f)?;
            writeln!(f, "[notifications]")?;
            for notification in &self.notifications {
                let marker = match notification.level {
                    NotificationLevel::Info => "i",
                    NotificationLevel::Error => "!",
                };
                writeln!(f, "  {marker} #{} {}", notification.id, notification.message)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for LeftPaneView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collapsed {
            return writeln!(f, "[left: collapsed]");
        }

        let tabs: Vec<String> = LeftTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.selected {
                    format!("*{}*", tab.label())
                } else {
                    tab.label().to_string()
                }
            })
            .collect();
        writeln!(f, "[left: {}]", tabs.join(" | "))?;

        match &self.body {
            LeftPaneBody::Files(folders) => {
                for folder in folders {
                    writeln!(f, "  {}/", folder.name)?;
                    for file in &folder.files {
                        writeln!(f, "    {}", file.name)?;
                    }
                }
            }
            LeftPaneBody::Knowledge => writeln!(f, "  knowledge base")?,
            LeftPaneBody::Settings(form) => write!(f, "{form}")?,
        }
        Ok(())
    }
}

impl fmt::Display for SettingsFormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  retrieval model: {}", self.values.indexer_model)?;
        writeln!(f, "  generation model: {}", self.values.generation_model.label())?;
        writeln!(
            f,
            "  image size: {}x{}",
            self.values.resized_width, self.values.resized_height
        )?;

        let status = match &self.status {
            SettingsState::Uninitialized => "not loaded".to_string(),
            SettingsState::Loading => "loading...".to_string(),
            SettingsState::Loaded => "loaded".to_string(),
            SettingsState::Saving => "saving...".to_string(),
            SettingsState::LoadFailed(reason) => format!("load failed: {reason}"),
            SettingsState::SaveFailed(reason) => format!("save failed: {reason}"),
        };
        writeln!(f, "  status: {status}")?;

        if self.can_save {
            writeln!(f, "  [save settings]")?;
        }
        Ok(())
    }
}

impl fmt::Display for EditorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("*{}*", tab.title)
                } else {
                    tab.title.clone()
                }
            })
            .collect();
        writeln!(f, "[editor: {}]", tabs.join(" | "))?;

        match &self.active {
            Some(document) => {
                for line in document.text.lines() {
                    writeln!(f, "  {line}")?;
                }
            }
            None => writeln!(f, "  no document open")?,
        }
        Ok(())
    }
}

impl fmt::Display for AssistantView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collapsed {
            return writeln!(f, "[assistant: collapsed]");
        }

        writeln!(f, "[assistant]")?;
        writeln!(f, "  {}", self.greeting)?;
        for message in &self.transcript {
            writeln!(f, "  > {message}")?;
        }
        if self.draft.is_empty() {
            writeln!(f, "  ({})", self.placeholder)
        } else {
            writeln!(f, "  draft: {}", self.draft)
        }
    }
}
