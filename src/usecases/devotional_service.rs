//! Devotional generation pipeline. Orchestrates the stages:
//! resolve scripture → classify audience → retrieve context → build
//! prompt → complete → parse. Strictly linear, one pass per request.
//!
//! Every stage before the completion call degrades in place; only a
//! completion failure propagates to the caller.

use crate::domain::{classify, scripture, Devotional, DevotionalRequest, DomainError};
use crate::ports::CompletionPort;
use crate::usecases::parser::parse_or_fallback;
use crate::usecases::prompt;
use crate::usecases::retriever::ContentRetriever;
use std::sync::Arc;
use tracing::info;

/// Search query used when a structured request names no topic.
const DEFAULT_SEARCH_QUERY: &str = "faith spiritual growth Bible devotional";

pub struct DevotionalService {
    completion: Arc<dyn CompletionPort>,
    retriever: ContentRetriever,
}

impl DevotionalService {
    pub fn new(completion: Arc<dyn CompletionPort>, retriever: ContentRetriever) -> Self {
        Self {
            completion,
            retriever,
        }
    }

    /// Generate one devotional.
    ///
    /// # Errors
    /// Returns `DomainError::Completion` when the completion service call
    /// fails; no other stage raises.
    pub async fn generate(&self, request: DevotionalRequest) -> Result<Devotional, DomainError> {
        let (age_group, scripture_ref, topic, search_query) = match &request {
            DevotionalRequest::Freeform { prompt } => {
                let scripture_ref =
                    scripture::extract(prompt).unwrap_or_else(scripture::random_reference);
                let age_group = classify::classify(prompt);
                let search_query = format!("{prompt} {scripture_ref}");
                (age_group, scripture_ref, None, search_query)
            }
            DevotionalRequest::Structured { age_group, topic } => {
                // Same resolution rule as free text: honor a reference named
                // in the topic, otherwise draw from the seed list.
                let scripture_ref = topic
                    .as_deref()
                    .and_then(scripture::extract)
                    .unwrap_or_else(scripture::random_reference);
                let search_query = topic
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string());
                (*age_group, scripture_ref, topic.clone(), search_query)
            }
        };

        info!(
            age_group = %age_group,
            scripture = %scripture_ref,
            "generating devotional"
        );

        let context = self.retriever.retrieve(&search_query).await;
        let built = prompt::build(age_group, &scripture_ref, &context.text, &request);

        let raw = self.completion.complete(built.system, &built.user).await?;

        let body = parse_or_fallback(&raw, age_group, &scripture_ref);

        info!(
            age_group = %age_group,
            scripture = %scripture_ref,
            context_source = ?context.source,
            "devotional generated"
        );

        Ok(Devotional {
            body,
            age_group,
            scripture_reference: scripture_ref,
            topic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionAdapter;
    use crate::domain::AgeGroup;

    struct FailingCompletion;

    #[async_trait::async_trait]
    impl CompletionPort for FailingCompletion {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, DomainError> {
            Err(DomainError::Completion("401 Unauthorized".into()))
        }
    }

    fn service_with_mock() -> DevotionalService {
        DevotionalService::new(
            Arc::new(MockCompletionAdapter::with_delay(0)),
            ContentRetriever::fallback_only(),
        )
    }

    #[tokio::test]
    async fn test_freeform_extracts_age_and_scripture() {
        let service = service_with_mock();
        let devotional = service
            .generate(DevotionalRequest::Freeform {
                prompt: "Create a devotional for children about God's love using John 3:16"
                    .to_string(),
            })
            .await
            .unwrap();

        assert_eq!(devotional.age_group, AgeGroup::Children);
        assert_eq!(devotional.scripture_reference, "John 3:16");
        assert_eq!(devotional.topic, None);
        assert!(devotional.body.is_complete());
    }

    #[tokio::test]
    async fn test_freeform_without_reference_uses_seed_verse() {
        let service = service_with_mock();
        let devotional = service
            .generate(DevotionalRequest::Freeform {
                prompt: "a devotional about gratitude for teens".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(devotional.age_group, AgeGroup::Teens);
        assert!(scripture::RANDOM_REFERENCES
            .contains(&devotional.scripture_reference.as_str()));
    }

    #[tokio::test]
    async fn test_structured_echoes_topic() {
        let service = service_with_mock();
        let devotional = service
            .generate(DevotionalRequest::Structured {
                age_group: AgeGroup::Teens,
                topic: Some("Patience".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(devotional.age_group, AgeGroup::Teens);
        assert_eq!(devotional.topic.as_deref(), Some("Patience"));
        assert!(!devotional.scripture_reference.is_empty());
        assert!(devotional.body.is_complete());
    }

    #[tokio::test]
    async fn test_structured_topic_may_carry_reference() {
        let service = service_with_mock();
        let devotional = service
            .generate(DevotionalRequest::Structured {
                age_group: AgeGroup::Adults,
                topic: Some("Forgiveness in Matthew 6:14-15".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(devotional.scripture_reference, "Matthew 6:14-15");
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let service = DevotionalService::new(
            Arc::new(FailingCompletion),
            ContentRetriever::fallback_only(),
        );
        let err = service
            .generate(DevotionalRequest::Freeform {
                prompt: "a devotional about hope for adults".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Completion(_)));
    }
}
