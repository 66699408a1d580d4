//! Local ONNX embeddings via fastembed
//!
//! Default model is all-MiniLM-L6-v2 (384 dimensions).

use super::{discovery::find_model_cache_dir, l2_normalize, Encoder};
use crate::error::{Result, SentvecError};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::Path;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

const PROBE_TEXT: &str = "test";

/// Map a sentence-transformers style model name to a fastembed model.
///
/// Matching is case-insensitive and ignores a `sentence-transformers/` prefix.
pub fn resolve_model(name: &str) -> Result<EmbeddingModel> {
    let lowered = name.trim().to_ascii_lowercase();
    let short = lowered
        .strip_prefix("sentence-transformers/")
        .unwrap_or(&lowered);

    let model = match short {
        "all-minilm-l6-v2" => EmbeddingModel::AllMiniLML6V2,
        "all-minilm-l12-v2" => EmbeddingModel::AllMiniLML12V2,
        "paraphrase-multilingual-minilm-l12-v2" => EmbeddingModel::ParaphraseMLMiniLML12V2,
        "bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
        "bge-base-en-v1.5" => EmbeddingModel::BGEBaseENV15,
        "multilingual-e5-small" => EmbeddingModel::MultilingualE5Small,
        _ => {
            return Err(SentvecError::model_load(format!(
                "Unsupported embedding model: {name}"
            )))
        }
    };
    Ok(model)
}

/// fastembed `TextEmbedding` behind the [`Encoder`] trait
///
/// The model is loaded once in the constructor and reused for every call.
pub struct FastEmbedEncoder {
    model: TextEmbedding,
    name: String,
    dimension: usize,
}

impl FastEmbedEncoder {
    /// Load the default model, discovering the cache directory
    pub fn new() -> Result<Self> {
        Self::from_name(DEFAULT_MODEL, None)
    }

    /// Load a model by name
    ///
    /// # Arguments
    /// * `name` - Model name, e.g. `all-MiniLM-L6-v2`
    /// * `cache_dir` - Optional explicit directory for downloaded model files
    pub fn from_name(name: &str, cache_dir: Option<&Path>) -> Result<Self> {
        let model_kind = resolve_model(name)?;
        let cache_dir = find_model_cache_dir(cache_dir);

        log::info!(
            "Loading embedding model {} (cache: {})",
            name,
            cache_dir.display()
        );

        let options = InitOptions::new(model_kind)
            .with_cache_dir(cache_dir)
            .with_show_download_progress(false);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| SentvecError::model_load(format!("Failed to load {name}: {e}")))?;

        // Get dimension by encoding test string
        let probe = model
            .embed(vec![PROBE_TEXT], None)
            .map_err(|e| SentvecError::model_load(format!("Failed to encode test string: {e}")))?;
        let dimension = probe.first().map(Vec::len).unwrap_or(0);
        if dimension == 0 {
            return Err(SentvecError::model_load(format!(
                "Model {name} produced an empty embedding"
            )));
        }

        log::info!("Loaded {} ({}d)", name, dimension);

        Ok(Self {
            model,
            name: name.to_string(),
            dimension,
        })
    }
}

impl Encoder for FastEmbedEncoder {
    fn encode(&self, text: &str, normalize: bool) -> Result<Vec<f32>> {
        let mut embeddings = self
            .model
            .embed(vec![text], None)
            .map_err(|e| SentvecError::encoding(format!("Failed to encode text: {e}")))?;

        let mut vector = embeddings
            .pop()
            .ok_or_else(|| SentvecError::encoding("Model returned no embedding"))?;
        if vector.len() != self.dimension {
            return Err(SentvecError::encoding(format!(
                "Expected {} dimensions, got {}",
                self.dimension,
                vector.len()
            )));
        }
        if normalize {
            l2_normalize(&mut vector);
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
