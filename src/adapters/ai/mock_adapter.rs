//! Mock completion adapter for running without API calls.
//!
//! Returns a fixed well-formed devotional JSON so the full pipeline,
//! parser included, is exercised in development and tests.

use crate::domain::DomainError;
use crate::ports::CompletionPort;
use std::time::Duration;
use tracing::info;

/// Mock completion adapter.
///
/// Simulates network latency with a configurable delay.
pub struct MockCompletionAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockCompletionAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockCompletionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, DomainError> {
        info!(
            prompt_len = user_prompt.len(),
            "[MOCK] Simulating completion call"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        // A complete devotional, wrapped in prose the way real models
        // often wrap JSON.
        Ok(r#"Here is your devotional:
{
    "title": "Day 1—FAMILY DEVOTIONS",
    "question_of_day": "Question of the Day: Where do you see God's faithfulness today?",
    "listen_scripture": "Lamentations 3:22-23",
    "listen_content": "Pray and ask God to speak to you before you read today's Scripture.\n\nRead today's passage slowly.\n\n[MOCK] God's mercies are new every morning; this passage invites us to notice them.\n\nQuestion\nWhat does the writer say is new every morning?\nAnswer: God's mercies and compassion.",
    "learn_content": "Question\nWhy can we have hope even on hard days?\nAnswer: Because God's faithfulness does not depend on our circumstances.\n\n[MOCK] Remembering God's past faithfulness builds confidence for today.",
    "live_content": "[MOCK] Look for one sign of God's faithfulness before the day ends.\n\nQuestion\nWhat is one way God has been faithful to you this week?\nAnswer: Answers will vary.\n\nQuestion\nWho can you remind of God's faithfulness today?\nAnswer: Answers will vary.",
    "prayer": "Dear God, thank You for mercies that are new every morning. Help me to trust Your faithfulness today. I love You, God. Amen.",
    "age_group": "adults",
    "scripture_reference": "Lamentations 3:22-23"
}"#
        .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter_returns_parsable_devotional() {
        let adapter = MockCompletionAdapter::with_delay(10);
        let raw = adapter.complete("system", "user").await.unwrap();

        assert!(raw.contains('{') && raw.contains('}'));
        let start = raw.find('{').unwrap();
        let end = raw.rfind('}').unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw[start..=end]).unwrap();
        assert!(value.get("prayer").is_some());
    }
}
