//! Error types for sentvec

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating embedding records
#[derive(Debug, Error)]
pub enum SentvecError {
    /// The embedding model could not be initialized
    #[error("Model error: {0}")]
    ModelLoad(String),

    /// A text could not be converted to a vector
    #[error("Embedding error: {0}")]
    Encoding(String),

    /// The output artifact could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A records file or input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Remote embeddings endpoint failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl SentvecError {
    /// Create a model load error
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create an encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Short stable label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelLoad(_) => "model_load",
            Self::Encoding(_) => "encoding",
            Self::Write { .. } => "write",
            Self::Read { .. } => "read",
            Self::Json(_) => "json",
            Self::InvalidPath(_) => "invalid_path",
            Self::Config(_) => "config",
            Self::Http(_) => "http",
        }
    }
}

/// Result type for sentvec operations
pub type Result<T> = std::result::Result<T, SentvecError>;
