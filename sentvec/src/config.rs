//! Generator configuration
//!
//! Defaults reproduce the fixed run: all-MiniLM-L6-v2, three Portuguese
//! sentences, normalized vectors, `data.json`. Environment variables and CLI
//! flags can override each field.

use crate::embedding::{RemoteConfig, DEFAULT_MODEL};
use crate::error::{Result, SentvecError};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when none is configured
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Texts encoded when none are supplied
pub const DEFAULT_TEXTS: [&str; 3] = [
    "Brasília é a capital do Brasil.",
    "O maior cajueiro do mundo está no Rio Grande do Norte.",
    "O Sol é uma estrela da sequência principal do tipo espectral G2.",
];

pub const ENV_MODEL: &str = "SENTVEC_MODEL";
pub const ENV_OUTPUT: &str = "SENTVEC_OUTPUT";
pub const ENV_CACHE_DIR: &str = "SENTVEC_CACHE_DIR";
pub const ENV_NORMALIZE: &str = "SENTVEC_NORMALIZE";
pub const ENV_API_URL: &str = "SENTVEC_API_URL";
pub const ENV_API_KEY: &str = "SENTVEC_API_KEY";

/// Which encoder produces the vectors
#[derive(Debug, Clone)]
pub enum Backend {
    /// fastembed ONNX model on this machine
    Local,
    /// OpenAI-compatible HTTP endpoint
    Remote(RemoteConfig),
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model name (local model or remote model id)
    pub model: String,
    /// Destination JSON file
    pub output: PathBuf,
    /// L2-normalize every embedding (default: true)
    pub normalize: bool,
    /// Texts to encode, in order
    pub texts: Vec<String>,
    /// Model download cache
    pub cache_dir: Option<PathBuf>,
    pub backend: Backend,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            normalize: true,
            texts: DEFAULT_TEXTS.iter().map(|t| t.to_string()).collect(),
            cache_dir: None,
            backend: Backend::Local,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with `SENTVEC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }
        if let Some(output) = get(ENV_OUTPUT) {
            config.output = PathBuf::from(output);
        }
        if let Some(dir) = get(ENV_CACHE_DIR) {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        if let Some(value) = get(ENV_NORMALIZE) {
            config.normalize = parse_bool(ENV_NORMALIZE, &value)?;
        }
        if let Some(url) = get(ENV_API_URL) {
            let mut remote = RemoteConfig::new(url, config.model.clone());
            if let Some(key) = get(ENV_API_KEY) {
                remote = remote.with_api_key(key);
            }
            config.backend = Backend::Remote(remote);
        }

        Ok(config)
    }

    /// Replace the texts with the non-empty lines of a file
    pub fn load_texts(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| SentvecError::read(path, e))?;
        self.texts = parse_text_lines(&content);
        log::debug!("Loaded {} texts from {}", self.texts.len(), path.display());
        Ok(())
    }

    /// Use a remote endpoint instead of the local model
    pub fn use_remote(&mut self, base_url: impl Into<String>, api_key: Option<String>) {
        let mut remote = RemoteConfig::new(base_url, self.model.clone());
        if let Some(key) = api_key {
            remote = remote.with_api_key(key);
        }
        self.backend = Backend::Remote(remote);
    }
}

/// One text per line; blank lines are skipped, other lines kept verbatim
fn parse_text_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SentvecError::config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "all-MiniLM-L6-v2");
        assert_eq!(config.output, PathBuf::from("data.json"));
        assert!(config.normalize);
        assert_eq!(config.texts.len(), 3);
        assert_eq!(config.texts[0], "Brasília é a capital do Brasil.");
        assert!(matches!(config.backend, Backend::Local));
    }

    #[test]
    fn test_env_overrides() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (ENV_MODEL, "bge-small-en-v1.5"),
            (ENV_OUTPUT, "out/vectors.json"),
            (ENV_NORMALIZE, "no"),
            (ENV_CACHE_DIR, "/var/cache/models"),
        ]))
        .unwrap();
        assert_eq!(config.model, "bge-small-en-v1.5");
        assert_eq!(config.output, PathBuf::from("out/vectors.json"));
        assert!(!config.normalize);
        assert_eq!(config.cache_dir, Some(PathBuf::from("/var/cache/models")));
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let config = GeneratorConfig::from_lookup(lookup(&[(ENV_MODEL, "  ")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_bool() {
        let err = GeneratorConfig::from_lookup(lookup(&[(ENV_NORMALIZE, "maybe")])).unwrap_err();
        assert_eq!(err.kind(), "config");
        assert!(err.to_string().contains(ENV_NORMALIZE));
    }

    #[test]
    fn test_remote_backend_from_env() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (ENV_MODEL, "text-embedding-ada-002"),
            (ENV_API_URL, "https://api.groq.com/openai/v1"),
            (ENV_API_KEY, "secret"),
        ]))
        .unwrap();
        match config.backend {
            Backend::Remote(remote) => {
                assert_eq!(remote.model, "text-embedding-ada-002");
                assert_eq!(remote.api_key.as_deref(), Some("secret"));
            }
            Backend::Local => panic!("expected remote backend"),
        }
    }

    #[test]
    fn test_load_texts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("texts.txt");
        fs::write(&path, "primeira linha\n\n  segunda com espaço \n").unwrap();

        let mut config = GeneratorConfig::default();
        config.load_texts(&path).unwrap();
        assert_eq!(config.texts, vec!["primeira linha", "  segunda com espaço "]);
    }

    #[test]
    fn test_load_texts_missing_file() {
        let mut config = GeneratorConfig::default();
        let err = config.load_texts(Path::new("/nonexistent/texts.txt")).unwrap_err();
        assert_eq!(err.kind(), "read");
        assert_eq!(config.texts.len(), 3);
    }
}
