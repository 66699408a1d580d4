//! Embedding record types
//!
//! A record pairs a fresh identifier with its source text and embedding.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Create a new random RecordId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One encoded text
///
/// Serialized as `{"id": "...", "texto": "...", "embedding": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "texto", alias = "text")]
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Record {
    /// Create a record with a freshly generated id
    pub fn new(text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: RecordId::new(),
            text: text.into(),
            embedding,
        }
    }

    /// Embedding dimensionality
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
