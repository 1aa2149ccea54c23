//! Pinecone adapter. Implements VectorIndexPort via the index query REST API.
//!
//! Requires the index host URL (per-index, from the Pinecone console) and an
//! API key. Metadata is requested, raw vectors are not; matches without a
//! text metadata field are dropped here so the retriever only ever sees
//! usable chunks.

use crate::domain::{ContextChunk, DomainError};
use crate::ports::VectorIndexPort;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub struct PineconeAdapter {
    client: Client,
    index_host: String,
    api_key: String,
    timeout: Duration,
}

impl PineconeAdapter {
    /// Create a new Pinecone adapter.
    ///
    /// # Arguments
    /// * `index_host` - index endpoint (e.g. "https://my-index-abc123.svc.us-east-1-aws.pinecone.io")
    /// * `api_key` - Pinecone API key
    pub fn new(index_host: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            index_host,
            api_key,
            timeout,
        }
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<MatchMetadata>,
}

#[derive(Deserialize)]
struct MatchMetadata {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait::async_trait]
impl VectorIndexPort for PineconeAdapter {
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<ContextChunk>, DomainError> {
        let url = format!("{}/query", self.index_host.trim_end_matches('/'));

        let body = serde_json::json!({
            "vector": vector,
            "topK": top_k,
            "includeMetadata": true,
            "includeValues": false,
        });

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::VectorIndex(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::VectorIndex(format!(
                "Pinecone API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| DomainError::VectorIndex(format!("Failed to parse response: {}", e)))?;

        let chunks: Vec<ContextChunk> = query_response
            .matches
            .into_iter()
            .filter_map(|m| {
                let score = m.score;
                m.metadata
                    .and_then(|meta| meta.text)
                    .map(|text| ContextChunk { text, score })
            })
            .collect();

        debug!(matches = chunks.len(), "vector index query complete");

        Ok(chunks)
    }
}
