// ABOUTME: Workspace state container composing tabs, content, panels and side panes
// ABOUTME: Single entry point for user actions; publishes a domain event for each change

use std::sync::Arc;

use briefcase_events::{EventBus, document, workspace::Event as WorkspaceEvent};
use briefcase_types::{ContentTree, Document, DocumentId, LeftTab, PanelSide};
use tracing::{debug, warn};

use crate::assistant::AssistantPanel;
use crate::content::DocumentContentStore;
use crate::editing::EditingSurface;
use crate::error::{Result, WorkspaceError};
use crate::file_browser::FileBrowser;
use crate::notification::Notifications;
use crate::panels::PanelController;
use crate::session::{CloseOutcome, OpenOutcome, TabSession};

pub struct Workspace {
    session: TabSession,
    contents: DocumentContentStore,
    panels: PanelController,
    left_tab: LeftTab,
    files: FileBrowser,
    assistant: AssistantPanel,
    notifications: Notifications,
    surface: Box<dyn EditingSurface>,
    events: Arc<dyn EventBus>,
}

impl Workspace {
    /// Empty workspace over the sample file tree
    pub fn new(events: Arc<dyn EventBus>, surface: Box<dyn EditingSurface>) -> Self {
        Self {
            session: TabSession::new(),
            contents: DocumentContentStore::new(),
            panels: PanelController::new(),
            left_tab: LeftTab::default(),
            files: FileBrowser::sample(),
            assistant: AssistantPanel::new(),
            notifications: Notifications::new(),
            surface,
            events,
        }
    }

    /// Workspace with the three sample documents open and the first one active
    pub fn with_sample_session(
        events: Arc<dyn EventBus>,
        surface: Box<dyn EditingSurface>,
    ) -> Self {
        let mut workspace = Self::new(events, surface);
        let mut first = None;
        for name in ["project proposal.md", "meeting notes.md", "research paper.md"] {
            let document = match workspace.files.open_file("documents", name, |_| false) {
                Ok(document) => document,
                Err(error) => {
                    warn!(file = name, %error, "Sample document missing from file tree");
                    continue;
                }
            };
            let content = ContentTree::from_plain_text(&format!("editor content for {name}"));
            first.get_or_insert_with(|| document.id.clone());
            workspace.open_document(document.with_content(content));
        }
        if let Some(first) = first {
            if let Err(error) = workspace.activate_tab(&first) {
                warn!(doc_id = %first, %error, "Cannot activate first sample document");
            }
        }
        workspace
    }

    /// Open `document` in a tab, or activate its existing tab.
    ///
    /// The document's content is recorded only the first time it is opened.
    pub fn open_document(&mut self, document: Document) -> OpenOutcome {
        let previous = self.session.active().cloned();
        let outcome = self.session.open(&document);
        self.contents.ensure(&document.id, document.content.clone());

        if outcome == OpenOutcome::Inserted {
            debug!(doc_id = %document.id, title = %document.title, "Tab opened");
            self.events.dispatch_workspace(WorkspaceEvent::TabOpened {
                doc_id: document.id.clone(),
                title: document.title.clone(),
            });
        }
        self.after_selection_change(previous);
        outcome
    }

    /// Open a file from the browser
    pub fn open_file(&mut self, folder: &str, file: &str) -> Result<DocumentId> {
        let (session, contents) = (&self.session, &self.contents);
        let document = self
            .files
            .open_file(folder, file, |id| session.contains(id) || contents.contains(id))
            .inspect_err(|error| {
                warn!(folder, file, %error, "Cannot open file");
            })?;
        let id = document.id.clone();
        self.open_document(document);
        Ok(id)
    }

    /// Create and open an untitled document
    pub fn new_document(&mut self) -> DocumentId {
        let (session, contents) = (&self.session, &self.contents);
        let document = self
            .files
            .new_document(|id| session.contains(id) || contents.contains(id));
        let id = document.id.clone();
        self.open_document(document);
        id
    }

    /// Close a tab and discard its content
    pub fn close_tab(&mut self, id: &DocumentId) -> Result<CloseOutcome> {
        let previous = self.session.active().cloned();
        let outcome = self.session.close(id).inspect_err(|error| {
            warn!(doc_id = %id, %error, "Close rejected");
        })?;

        if self.contents.remove(id).is_some() {
            self.events
                .dispatch_document(document::Event::ContentDropped { doc_id: id.clone() });
        }

        debug!(doc_id = %id, was_active = outcome.was_active, active = ?outcome.active, "Tab closed");
        self.events.dispatch_workspace(WorkspaceEvent::TabClosed {
            doc_id: id.clone(),
            was_active: outcome.was_active,
        });
        self.after_selection_change(previous);
        Ok(outcome)
    }

    pub fn activate_tab(&mut self, id: &DocumentId) -> Result<()> {
        let previous = self.session.active().cloned();
        self.session.set_active(id).inspect_err(|error| {
            warn!(doc_id = %id, %error, "Activate rejected");
        })?;
        self.after_selection_change(previous);
        Ok(())
    }

    /// Record an edit reported by the editing surface
    pub fn edit_content(&mut self, id: &DocumentId, content: ContentTree) -> Result<()> {
        if !self.session.contains(id) {
            warn!(doc_id = %id, "Edit for a document that is not open");
            return Err(WorkspaceError::tab_not_found(id));
        }
        let block_count = content.block_count();
        self.contents.set(id.clone(), content);
        self.events.dispatch_document(document::Event::ContentChanged {
            doc_id: id.clone(),
            block_count,
        });
        Ok(())
    }

    pub fn content(&self, id: &DocumentId) -> ContentTree {
        self.contents.get(id)
    }

    pub fn active_content(&self) -> Option<ContentTree> {
        self.session.active().map(|id| self.contents.get(id))
    }

    pub fn collapse_panel(&mut self, side: PanelSide) -> bool {
        let changed = self.panels.collapse(side);
        self.panel_changed(side, changed)
    }

    pub fn expand_panel(&mut self, side: PanelSide) -> bool {
        let changed = self.panels.expand(side);
        self.panel_changed(side, changed)
    }

    /// Returns the new collapsed state
    pub fn toggle_panel(&mut self, side: PanelSide) -> bool {
        let collapsed = self.panels.toggle(side);
        self.panel_changed(side, true);
        collapsed
    }

    /// Layout reported a new size for a side panel
    pub fn panel_resized(&mut self, side: PanelSide, size: f32) -> bool {
        let changed = self.panels.on_resize(side, size);
        self.panel_changed(side, changed)
    }

    pub fn select_left_tab(&mut self, tab: LeftTab) {
        if self.left_tab != tab {
            self.left_tab = tab;
            self.events
                .dispatch_workspace(WorkspaceEvent::LeftTabSelected { tab });
        }
    }

    pub fn session(&self) -> &TabSession {
        &self.session
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn left_tab(&self) -> LeftTab {
        self.left_tab
    }

    pub fn files(&self) -> &FileBrowser {
        &self.files
    }

    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut AssistantPanel {
        &mut self.assistant
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    fn panel_changed(&self, side: PanelSide, changed: bool) -> bool {
        if changed {
            let collapsed = self.panels.is_collapsed(side);
            debug!(%side, collapsed, "Panel toggled");
            self.events
                .dispatch_workspace(WorkspaceEvent::PanelToggled { side, collapsed });
        }
        changed
    }

    /// Re-attach the editing surface and publish a switch if the active tab moved
    fn after_selection_change(&mut self, previous: Option<DocumentId>) {
        let current = self.session.active().cloned();
        if previous == current {
            return;
        }

        match &current {
            Some(id) => self.surface.attach(id, &self.contents.get(id)),
            None => self.surface.detach(),
        }

        self.events.dispatch_workspace(WorkspaceEvent::TabSwitched { previous, current });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefcase_events::{AppEvent, ChannelEventBus, NoopEventBus};
    use std::sync::Mutex;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Surface that logs attach/detach calls into shared storage
    #[derive(Clone, Default)]
    struct RecordingSurface {
        log: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl EditingSurface for RecordingSurface {
        fn attach(&mut self, doc_id: &DocumentId, _content: &ContentTree) {
            self.log.lock().unwrap().push(Some(doc_id.to_string()));
        }

        fn detach(&mut self) {
            self.log.lock().unwrap().push(None);
        }
    }

    fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn id(id: &str) -> DocumentId {
        DocumentId::from(id)
    }

    fn sample() -> Workspace {
        Workspace::with_sample_session(Arc::new(NoopEventBus), Box::new(RecordingSurface::default()))
    }

    #[test]
    fn test_sample_session() {
        let workspace = sample();
        let titles: Vec<_> = workspace
            .session()
            .list()
            .iter()
            .map(|tab| tab.title.as_str())
            .collect();

        assert_eq!(
            titles,
            vec!["project proposal.md", "meeting notes.md", "research paper.md"]
        );
        assert_eq!(workspace.session().active(), Some(&id("doc-1")));
        assert_eq!(
            workspace.active_content().unwrap().plain_text(),
            "editor content for project proposal.md"
        );
    }

    #[test]
    fn test_open_file_twice_keeps_one_tab() {
        let mut workspace = sample();
        let first = workspace.open_file("images", "diagram.png").unwrap();
        workspace.activate_tab(&id("doc-1")).unwrap();
        let second = workspace.open_file("images", "diagram.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(workspace.session().len(), 4);
        assert_eq!(workspace.session().active(), Some(&first));
    }

    #[test]
    fn test_opened_file_does_not_reuse_an_external_id() {
        let mut workspace = sample();
        workspace.open_document(Document::new("doc-4", "imported.md"));

        let diagram = workspace.open_file("images", "diagram.png").unwrap();
        let untitled = workspace.new_document();

        assert_ne!(diagram, id("doc-4"));
        assert_ne!(untitled, id("doc-4"));
        assert_ne!(untitled, diagram);
        let titles: Vec<_> = workspace
            .session()
            .list()
            .iter()
            .map(|tab| tab.title.as_str())
            .collect();
        assert_eq!(
            titles[3..],
            ["imported.md", "diagram.png", "untitled-1.md"]
        );
        assert_eq!(workspace.session().active(), Some(&untitled));
    }

    #[test]
    fn test_reopen_keeps_edited_content() {
        let mut workspace = sample();
        let edited = ContentTree::from_plain_text("rewritten");
        workspace.edit_content(&id("doc-2"), edited.clone()).unwrap();

        workspace.open_file("documents", "meeting notes.md").unwrap();

        assert_eq!(workspace.content(&id("doc-2")), edited);
    }

    #[test]
    fn test_new_document_has_empty_content() {
        let mut workspace = sample();
        let doc_id = workspace.new_document();

        assert_eq!(workspace.session().active(), Some(&doc_id));
        assert_eq!(workspace.content(&doc_id), ContentTree::default());
    }

    #[test]
    fn test_close_drops_content_and_moves_selection() {
        let mut workspace = sample();
        workspace.activate_tab(&id("doc-2")).unwrap();

        let outcome = workspace.close_tab(&id("doc-2")).unwrap();

        assert_eq!(outcome.active, Some(id("doc-1")));
        assert_eq!(workspace.content(&id("doc-2")), ContentTree::default());
        assert_eq!(workspace.session().len(), 2);
    }

    #[test]
    fn test_close_all_tabs_detaches_surface() {
        let surface = RecordingSurface::default();
        let log = surface.log.clone();
        let mut workspace =
            Workspace::with_sample_session(Arc::new(NoopEventBus), Box::new(surface));

        for doc in ["doc-1", "doc-2", "doc-3"] {
            workspace.close_tab(&id(doc)).unwrap();
        }

        assert_eq!(workspace.session().active(), None);
        assert_eq!(workspace.active_content(), None);
        assert_eq!(log.lock().unwrap().last(), Some(&None));
    }

    #[test]
    fn test_surface_follows_active_tab() {
        let surface = RecordingSurface::default();
        let log = surface.log.clone();
        let mut workspace =
            Workspace::with_sample_session(Arc::new(NoopEventBus), Box::new(surface));
        log.lock().unwrap().clear();

        workspace.activate_tab(&id("doc-3")).unwrap();
        // Same tab again: no re-attach
        workspace.activate_tab(&id("doc-3")).unwrap();
        // Closing an inactive tab: no re-attach
        workspace.close_tab(&id("doc-1")).unwrap();

        assert_eq!(*log.lock().unwrap(), vec![Some("doc-3".to_string())]);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut workspace = sample();

        assert!(workspace.close_tab(&id("doc-9")).is_err());
        assert!(workspace.activate_tab(&id("doc-9")).is_err());
        assert!(
            workspace
                .edit_content(&id("doc-9"), ContentTree::default())
                .is_err()
        );
        assert!(workspace.open_file("documents", "missing.md").is_err());
        assert_eq!(workspace.session().len(), 3);
        assert_eq!(workspace.session().active(), Some(&id("doc-1")));
    }

    #[test]
    fn test_events_published() {
        let (bus, mut rx) = ChannelEventBus::new();
        let mut workspace =
            Workspace::with_sample_session(Arc::new(bus), Box::new(RecordingSurface::default()));
        drain(&mut rx);

        workspace.close_tab(&id("doc-1")).unwrap();
        workspace.toggle_panel(PanelSide::Left);
        workspace.select_left_tab(LeftTab::Settings);
        workspace
            .edit_content(&id("doc-2"), ContentTree::from_plain_text("a\nb"))
            .unwrap();

        let events = drain(&mut rx);
        assert_eq!(
            events,
            vec![
                AppEvent::Document(document::Event::ContentDropped {
                    doc_id: id("doc-1")
                }),
                AppEvent::Workspace(WorkspaceEvent::TabClosed {
                    doc_id: id("doc-1"),
                    was_active: true,
                }),
                AppEvent::Workspace(WorkspaceEvent::TabSwitched {
                    previous: Some(id("doc-1")),
                    current: Some(id("doc-2")),
                }),
                AppEvent::Workspace(WorkspaceEvent::PanelToggled {
                    side: PanelSide::Left,
                    collapsed: true,
                }),
                AppEvent::Workspace(WorkspaceEvent::LeftTabSelected {
                    tab: LeftTab::Settings
                }),
                AppEvent::Document(document::Event::ContentChanged {
                    doc_id: id("doc-2"),
                    block_count: 2,
                }),
            ]
        );
    }

    #[test]
    fn test_panel_resize_emits_only_on_change() {
        let (bus, mut rx) = ChannelEventBus::new();
        let mut workspace = Workspace::new(Arc::new(bus), Box::new(RecordingSurface::default()));

        assert!(workspace.panel_resized(PanelSide::Right, 3.0));
        assert!(!workspace.panel_resized(PanelSide::Right, 4.0));
        assert!(workspace.panels().is_collapsed(PanelSide::Right));

        assert_eq!(drain(&mut rx).len(), 1);
    }

    #[test]
    fn test_rejected_close_logs_warning() {
        use tracing::Level;
        use tracing_mock::{expect, subscriber};

        let mut workspace = sample();
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(Level::WARN)
                    .with_fields(expect::field("doc_id")),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            assert!(workspace.close_tab(&id("doc-42")).is_err());
        });

        handle.assert_finished();
    }
}
