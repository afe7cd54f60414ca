// ABOUTME: Document identity and the rich-text content tree
// ABOUTME: Blocks hold styled text runs; an empty document is one empty paragraph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a document, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Inline style flags carried by a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStyle {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A contiguous piece of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(flatten)]
    pub style: RunStyle,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.style.code = true;
        self
    }
}

/// Block-level element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading {
        #[serde(deserialize_with = "deserialize_heading_level")]
        level: u8,
    },
}

fn deserialize_heading_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u8::deserialize(deserializer).map(|level| level.clamp(1, 6))
}

/// A block of rich text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub kind: BlockKind,
    pub children: Vec<TextRun>,
}

impl Block {
    /// Paragraph containing a single empty run
    pub fn empty_paragraph() -> Self {
        Self {
            kind: BlockKind::Paragraph,
            children: vec![TextRun::plain("")],
        }
    }

    pub fn paragraph(runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            children: runs.into_iter().collect(),
        }
    }

    /// Heading block; level is clamped to 1..=6
    pub fn heading(level: u8, runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self {
            kind: BlockKind::Heading {
                level: level.clamp(1, 6),
            },
            children: runs.into_iter().collect(),
        }
    }

    pub fn text(&self) -> String {
        self.children.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|run| run.text.is_empty())
    }
}

/// Ordered list of blocks making up a document body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Block>", into = "Vec<Block>")]
pub struct ContentTree {
    blocks: Vec<Block>,
}

impl From<Vec<Block>> for ContentTree {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl From<ContentTree> for Vec<Block> {
    fn from(tree: ContentTree) -> Self {
        tree.blocks
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
        }
    }
}

impl ContentTree {
    /// Build a tree from blocks. An empty block list yields the default tree.
    pub fn new(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            return Self::default();
        }
        Self { blocks }
    }

    /// One plain paragraph per line of `text`
    pub fn from_plain_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|line| Block::paragraph([TextRun::plain(line)]))
                .collect(),
        )
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_empty)
    }
}

/// A named unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub content: ContentTree,
}

impl Document {
    /// Create a document with the default empty content
    pub fn new(id: impl Into<DocumentId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: ContentTree::default(),
        }
    }

    pub fn with_content(mut self, content: ContentTree) -> Self {
        self.content = content;
        self
    }
}
