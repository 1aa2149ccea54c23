//! OpenAI-compatible completion adapter.
//!
//! Works against OpenAI, Azure OpenAI, or any API speaking the chat
//! completions contract. Implements `CompletionPort`; returns the raw
//! first-choice text and leaves parsing to the pipeline.

use crate::domain::DomainError;
use crate::ports::CompletionPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sampling parameters for devotional generation.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// OpenAI-compatible completion adapter.
pub struct OpenAiCompletionAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiCompletionAdapter {
    /// Create a new completion adapter.
    ///
    /// # Arguments
    /// * `api_url` - chat completions endpoint (e.g. "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - bearer token
    /// * `model` - model name (e.g. "gpt-4o-mini")
    /// * `timeout` - bound on each outbound call; a timeout surfaces as
    ///   `DomainError::Completion` like any other transport failure
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

/// Chat completions request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completions response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiCompletionAdapter {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = user_prompt.len(),
            "sending prompt to completion service"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Completion(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "completion API returned error");
            return Err(DomainError::Completion(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Completion(format!("Failed to parse API response: {}", e)))?;

        let raw_content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| DomainError::Completion("No response choices returned".to_string()))?;

        debug!(raw_len = raw_content.len(), "received completion");

        Ok(raw_content)
    }
}
