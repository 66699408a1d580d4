//! OpenAI-compatible embeddings endpoint
//!
//! Sends `POST {base_url}/embeddings` with `{"model", "input"}` and a bearer
//! token, and reads `data[0].embedding` from the response.

use super::{l2_normalize, Encoder};
use crate::error::{Result, SentvecError};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Remote endpoint settings
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Model name sent in the request body
    pub model: String,
    /// Bearer token, if the endpoint needs one
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Extract the first embedding from a response body
fn parse_embedding_response(body: &str) -> Result<Vec<f32>> {
    let response: EmbeddingResponse = serde_json::from_str(body)
        .map_err(|e| SentvecError::encoding(format!("Malformed embeddings response: {e}")))?;
    response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .ok_or_else(|| SentvecError::encoding("Embeddings response has no data"))
}

/// Encoder backed by an HTTP embeddings API
pub struct RemoteEncoder {
    config: RemoteConfig,
    agent: ureq::Agent,
    dimension: AtomicUsize,
}

impl RemoteEncoder {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(SentvecError::config(format!(
                "Embeddings API URL must be http(s): {}",
                config.base_url
            )));
        }
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        log::info!(
            "Using remote embeddings at {} (model {})",
            config.base_url,
            config.model
        );
        Ok(Self {
            config,
            agent,
            dimension: AtomicUsize::new(0),
        })
    }

    fn request(&self, text: &str) -> Result<String> {
        let mut request = self
            .agent
            .post(&self.config.endpoint())
            .set("Content-Type", "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.set("Authorization", &format!("Bearer {key}"));
        }

        let body = serde_json::json!({
            "model": self.config.model,
            "input": text,
        });

        match request.send_json(body) {
            Ok(response) => response
                .into_string()
                .map_err(|e| SentvecError::http(format!("Failed to read response: {e}"))),
            Err(ureq::Error::Status(code, _)) => Err(SentvecError::encoding(format!(
                "Embedding error {code}"
            ))),
            Err(e) => Err(SentvecError::http(e.to_string())),
        }
    }
}

impl Encoder for RemoteEncoder {
    fn encode(&self, text: &str, normalize: bool) -> Result<Vec<f32>> {
        let body = self.request(text)?;
        let mut vector = parse_embedding_response(&body)?;

        let known = self.dimension.load(Ordering::Relaxed);
        if known == 0 {
            self.dimension.store(vector.len(), Ordering::Relaxed);
        } else if known != vector.len() {
            return Err(SentvecError::encoding(format!(
                "Expected {} dimensions, got {}",
                known,
                vector.len()
            )));
        }

        if normalize {
            l2_normalize(&mut vector);
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension.load(Ordering::Relaxed)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
