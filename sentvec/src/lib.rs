//! Sentvec
//!
//! Encodes a list of texts with a pretrained sentence-embedding model and
//! writes one JSON record per text: a fresh UUID, the text, and the vector.
//!
//! ## Example
//!
//! ```ignore
//! use sentvec::{FastEmbedEncoder, GeneratorConfig, Pipeline};
//!
//! let config = GeneratorConfig::default();
//! let encoder = FastEmbedEncoder::from_name(&config.model, None)?;
//! let summary = Pipeline::new(encoder, config).run()?;
//! println!("{} records", summary.records);
//! ```

pub mod builder;
pub mod config;
pub mod embedding;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod serializer;

// Re-exports for convenience
pub use builder::RecordBuilder;
pub use config::{Backend, GeneratorConfig, DEFAULT_OUTPUT, DEFAULT_TEXTS};
pub use embedding::{
    l2_norm, l2_normalize, Encoder, FastEmbedEncoder, RemoteConfig, RemoteEncoder, DEFAULT_MODEL,
};
pub use error::{Result, SentvecError};
pub use pipeline::{generate, load_encoder, Pipeline, RunSummary};
pub use record::{Record, RecordId};
pub use serializer::{read_records, write_records};
