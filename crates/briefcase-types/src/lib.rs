// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other briefcase crates

pub mod document;
pub mod file_tree;
pub mod panel;
pub mod settings;
pub mod tab;

// Re-export commonly used types
pub use document::{Block, BlockKind, ContentTree, Document, DocumentId, RunStyle, TextRun};
pub use file_tree::{FileEntry, Folder};
pub use panel::{LeftTab, PanelSide};
pub use settings::{DIMENSION_STEP, GenerationModel, IndexerModel, MIN_DIMENSION, Settings};
pub use tab::Tab;
