// ABOUTME: File browser state: the folder tree and stable document ids for its files
// ABOUTME: Opening a file yields a Document reference; the same file always maps to the same id

use briefcase_types::{Document, DocumentId, Folder};
use std::collections::HashMap;

use crate::error::{ReferenceKind, Result, WorkspaceError};

#[derive(Debug, Clone)]
pub struct FileBrowser {
    folders: Vec<Folder>,
    /// "folder/file" -> assigned document id
    assigned: HashMap<String, DocumentId>,
    next_id: u64,
    next_untitled: u64,
}

impl FileBrowser {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            assigned: HashMap::new(),
            next_id: 1,
            next_untitled: 1,
        }
    }

    /// Sample tree with the three documents pre-assigned `doc-1`..`doc-3`
    pub fn sample() -> Self {
        let mut browser = Self::new(Folder::sample_tree());
        for name in ["project proposal.md", "meeting notes.md", "research paper.md"] {
            browser.assign("documents", name, |_| false);
        }
        browser
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Document reference for a file in the tree.
    ///
    /// A file opened for the first time gets a fresh id for which `is_taken`
    /// returns false; later opens return the same id.
    pub fn open_file(
        &mut self,
        folder: &str,
        file: &str,
        is_taken: impl Fn(&DocumentId) -> bool,
    ) -> Result<Document> {
        let entry = self
            .folders
            .iter()
            .find(|f| f.name == folder)
            .ok_or_else(|| WorkspaceError::invalid_reference(ReferenceKind::Folder, folder))?
            .file(file)
            .ok_or_else(|| {
                WorkspaceError::invalid_reference(ReferenceKind::File, format!("{folder}/{file}"))
            })?;

        let title = entry.name.clone();
        let id = self.assign(folder, file, is_taken);
        Ok(Document::new(id, title))
    }

    /// Fresh untitled document, not backed by any file
    pub fn new_document(&mut self, is_taken: impl Fn(&DocumentId) -> bool) -> Document {
        let title = format!("untitled-{}.md", self.next_untitled);
        self.next_untitled += 1;
        Document::new(self.allocate_id(is_taken), title)
    }

    /// Id already assigned to a file, if it has been opened before
    pub fn document_id(&self, folder: &str, file: &str) -> Option<&DocumentId> {
        self.assigned.get(&Self::key(folder, file))
    }

    fn assign(
        &mut self,
        folder: &str,
        file: &str,
        is_taken: impl Fn(&DocumentId) -> bool,
    ) -> DocumentId {
        let key = Self::key(folder, file);
        if let Some(id) = self.assigned.get(&key) {
            return id.clone();
        }
        let id = self.allocate_id(is_taken);
        self.assigned.insert(key, id.clone());
        id
    }

    /// Next `doc-N` that is neither taken by the caller nor assigned to a file
    fn allocate_id(&mut self, is_taken: impl Fn(&DocumentId) -> bool) -> DocumentId {
        loop {
            let id = DocumentId::new(format!("doc-{}", self.next_id));
            self.next_id += 1;
            if !is_taken(&id) && !self.assigned.values().any(|assigned| *assigned == id) {
                return id;
            }
        }
    }

    fn key(folder: &str, file: &str) -> String {
        format!("{folder}/{file}")
    }
}

impl Default for FileBrowser {
    fn default() -> Self {
        Self::sample()
    }
}
