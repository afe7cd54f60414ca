// ABOUTME: Narrow seam in front of the embedded rich-text editing engine
// ABOUTME: The workspace attaches content here; edits come back via Workspace::edit_content

use briefcase_types::{ContentTree, DocumentId};

/// A rich-text editing surface that displays one document at a time.
///
/// Implementations report local edits back by calling
/// `Workspace::edit_content`; the surface never writes to the store itself.
pub trait EditingSurface: Send {
    /// Show `content` for `doc_id`, replacing whatever was attached
    fn attach(&mut self, doc_id: &DocumentId, content: &ContentTree);

    /// Show nothing
    fn detach(&mut self);
}

/// Surface without a renderer. Remembers what is attached.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    attached: Option<(DocumentId, ContentTree)>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_id(&self) -> Option<&DocumentId> {
        self.attached.as_ref().map(|(id, _)| id)
    }

    pub fn attached_content(&self) -> Option<&ContentTree> {
        self.attached.as_ref().map(|(_, content)| content)
    }
}

impl EditingSurface for HeadlessSurface {
    fn attach(&mut self, doc_id: &DocumentId, content: &ContentTree) {
        self.attached = Some((doc_id.clone(), content.clone()));
    }

    fn detach(&mut self) {
        self.attached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_surface_tracks_attachment() {
        let mut surface = HeadlessSurface::new();
        assert!(surface.attached_id().is_none());

        let content = ContentTree::from_plain_text("hello");
        surface.attach(&DocumentId::from("doc-1"), &content);
        assert_eq!(surface.attached_id(), Some(&DocumentId::from("doc-1")));
        assert_eq!(surface.attached_content(), Some(&content));

        surface.detach();
        assert!(surface.attached_content().is_none());
    }
}
