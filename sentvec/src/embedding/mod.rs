//! Embedding module
//!
//! Local embeddings come from fastembed (ONNX, all-MiniLM-L6-v2 by default);
//! remote embeddings come from an OpenAI-compatible `/embeddings` endpoint.

mod discovery;
mod local;
mod remote;

pub use local::{resolve_model, FastEmbedEncoder, DEFAULT_MODEL};
pub use discovery::{find_model_cache_dir, find_model_cache_dir_with};
pub use remote::{RemoteConfig, RemoteEncoder};

use crate::error::Result;

/// Text to fixed-length vector
pub trait Encoder {
    /// Encode a single text. When `normalize` is set the result has unit L2 norm.
    fn encode(&self, text: &str, normalize: bool) -> Result<Vec<f32>>;

    /// Output dimensionality (0 if not yet known)
    fn dimension(&self) -> usize;

    /// Model identifier
    fn model_name(&self) -> &str;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, text: &str, normalize: bool) -> Result<Vec<f32>> {
        (**self).encode(text, normalize)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&self, text: &str, normalize: bool) -> Result<Vec<f32>> {
        (**self).encode(text, normalize)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Euclidean length of a vector
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale `v` in place to unit length. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = l2_norm(v);
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
