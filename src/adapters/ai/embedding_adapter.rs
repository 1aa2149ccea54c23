//! Embedding adapter. Implements `EmbeddingPort` over the OpenAI-compatible
//! embeddings REST API: one input string, one dense vector back.

use crate::domain::DomainError;
use crate::ports::EmbeddingPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OpenAiEmbeddingAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiEmbeddingAdapter {
    /// Create a new embedding adapter.
    ///
    /// # Arguments
    /// * `api_url` - embeddings endpoint (e.g. "https://api.openai.com/v1/embeddings")
    /// * `api_key` - bearer token (shared with the completion adapter)
    /// * `model` - embedding model name (e.g. "text-embedding-3-large")
    pub fn new(api_url: String, api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            timeout,
        }
    }
}

#[derive(Serialize)]
struct EmbeddingRequest {
    model: String,
    input: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait::async_trait]
impl EmbeddingPort for OpenAiEmbeddingAdapter {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&EmbeddingRequest {
                model: self.model.clone(),
                input: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Embedding(format!("Failed to parse API response: {}", e)))?;

        let embedding = embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| DomainError::Embedding("No embedding returned".to_string()))?;

        debug!(dims = embedding.len(), "embedded query");

        Ok(embedding)
    }
}
