// ABOUTME: File browser tree types: named folders holding named files
// ABOUTME: Includes the sample tree shown before any real source is connected

use serde::{Deserialize, Serialize};

/// A file listed in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A folder of files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub files: Vec<FileEntry>,
}

impl Folder {
    pub fn new(name: impl Into<String>, files: impl IntoIterator<Item = FileEntry>) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().collect(),
        }
    }

    pub fn file(&self, name: &str) -> Option<&FileEntry> {
        self.files.iter().find(|file| file.name == name)
    }

    /// The sample tree: a documents folder and an images folder
    pub fn sample_tree() -> Vec<Folder> {
        vec![
            Folder::new(
                "documents",
                [
                    FileEntry::new("project proposal.md"),
                    FileEntry::new("meeting notes.md"),
                    FileEntry::new("research paper.md"),
                ],
            ),
            Folder::new(
                "images",
                [
                    FileEntry::new("screenshot.png"),
                    FileEntry::new("diagram.png"),
                ],
            ),
        ]
    }
}
