// ABOUTME: Model and image-resize settings exchanged with the settings endpoint
// ABOUTME: Wire format uses snake_case field names and model identifier strings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resize dimensions must be multiples of this value
pub const DIMENSION_STEP: u32 = 28;

/// Smallest accepted resize dimension
pub const MIN_DIMENSION: u32 = DIMENSION_STEP;

/// Retrieval model used to index documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexerModel {
    #[default]
    #[serde(rename = "vidore/colpali")]
    ColPali,
    #[serde(rename = "vidore/colpali-v1.2")]
    ColPaliV1_2,
    #[serde(rename = "vidore/colqwen2-v0.1")]
    ColQwen2,
}

impl IndexerModel {
    pub const ALL: [IndexerModel; 3] = [
        IndexerModel::ColPali,
        IndexerModel::ColPaliV1_2,
        IndexerModel::ColQwen2,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            IndexerModel::ColPali => "vidore/colpali",
            IndexerModel::ColPaliV1_2 => "vidore/colpali-v1.2",
            IndexerModel::ColQwen2 => "vidore/colqwen2-v0.1",
        }
    }
}

impl fmt::Display for IndexerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vision-language model used to generate answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationModel {
    #[default]
    Qwen,
    Gemini,
    Gpt4,
    LlamaVision,
    Pixtral,
    Molmo,
    GroqLlamaVision,
}

impl GenerationModel {
    pub const ALL: [GenerationModel; 7] = [
        GenerationModel::Qwen,
        GenerationModel::Gemini,
        GenerationModel::Gpt4,
        GenerationModel::LlamaVision,
        GenerationModel::Pixtral,
        GenerationModel::Molmo,
        GenerationModel::GroqLlamaVision,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            GenerationModel::Qwen => "qwen",
            GenerationModel::Gemini => "gemini",
            GenerationModel::Gpt4 => "gpt4",
            GenerationModel::LlamaVision => "llama-vision",
            GenerationModel::Pixtral => "pixtral",
            GenerationModel::Molmo => "molmo",
            GenerationModel::GroqLlamaVision => "groq-llama-vision",
        }
    }

    /// Human readable name shown in the settings form
    pub fn label(&self) -> &'static str {
        match self {
            GenerationModel::Qwen => "Qwen2-VL-7B-Instruct",
            GenerationModel::Gemini => "Google Gemini",
            GenerationModel::Gpt4 => "OpenAI GPT-4",
            GenerationModel::LlamaVision => "Llama-Vision",
            GenerationModel::Pixtral => "Pixtral",
            GenerationModel::Molmo => "Molmo",
            GenerationModel::GroqLlamaVision => "Groq Llama Vision",
        }
    }
}

impl fmt::Display for GenerationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The four persisted settings values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub indexer_model: IndexerModel,
    pub generation_model: GenerationModel,
    pub resized_height: u32,
    pub resized_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indexer_model: IndexerModel::default(),
            generation_model: GenerationModel::default(),
            resized_height: 8 * DIMENSION_STEP,
            resized_width: 8 * DIMENSION_STEP,
        }
    }
}
