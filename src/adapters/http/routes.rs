//! HTTP handlers. Edge validation, error mapping, response DTOs.
//!
//! Validation failures answer 400 before the pipeline runs; a completion
//! failure answers a generic 500 with the detail logged server-side.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::{AgeGroup, DevotionalBody, DevotionalRequest, DomainError};
use crate::usecases::DevotionalService;

/// Fixed topic suggestions served by `GET /topics`.
pub const SUGGESTED_TOPICS: [&str; 10] = [
    "Faith and Trust",
    "Love and Kindness",
    "Prayer and Worship",
    "Forgiveness",
    "Patience",
    "Gratitude",
    "Courage",
    "Family",
    "Friendship",
    "Service to Others",
];

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DevotionalService>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDevotionalRequest {
    pub age_group: String,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Free-text entry point response: echoes the resolved scripture reference.
#[derive(Debug, Serialize)]
pub struct FreeformDevotionalResponse {
    #[serde(flatten)]
    pub body: DevotionalBody,
    pub age_group: AgeGroup,
    pub scripture_reference: String,
}

/// Explicit entry point response: echoes the requested topic (null when absent).
#[derive(Debug, Serialize)]
pub struct StructuredDevotionalResponse {
    #[serde(flatten)]
    pub body: DevotionalBody,
    pub age_group: AgeGroup,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map pipeline errors onto the wire: validation answers 400 with its own
/// message, everything else answers a generic 500 with the detail logged.
fn into_api_error(e: DomainError) -> ApiError {
    match e {
        DomainError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
        }
        other => {
            error!(error = %other, "devotional generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Sorry, there was an error generating your devotional. Please \
                            try again."
                        .to_string(),
                }),
            )
        }
    }
}

fn validate_prompt(raw: &str) -> Result<String, DomainError> {
    let prompt = raw.trim().to_string();
    if prompt.is_empty() {
        return Err(DomainError::Validation(
            "Please provide a devotional request.".to_string(),
        ));
    }
    if prompt.chars().count() < 10 {
        return Err(DomainError::Validation(
            "Please provide a more detailed request. Include the age group and what kind \
             of devotional you would like."
                .to_string(),
        ));
    }
    Ok(prompt)
}

/// `POST /generate` — free-text devotional request.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<FreeformDevotionalResponse>, ApiError> {
    let prompt = validate_prompt(&request.prompt).map_err(into_api_error)?;

    let devotional = state
        .service
        .generate(DevotionalRequest::Freeform { prompt })
        .await
        .map_err(into_api_error)?;

    Ok(Json(FreeformDevotionalResponse {
        body: devotional.body,
        age_group: devotional.age_group,
        scripture_reference: devotional.scripture_reference,
    }))
}

/// `POST /generate-devotional` — explicit age group and optional topic.
pub async fn generate_devotional_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateDevotionalRequest>,
) -> Result<Json<StructuredDevotionalResponse>, ApiError> {
    let age_group = AgeGroup::parse(&request.age_group)
        .ok_or_else(|| {
            DomainError::Validation(
                "Age group must be one of: children, teens, young_adults, adults".to_string(),
            )
        })
        .map_err(into_api_error)?;
    let topic = request.topic.filter(|t| !t.trim().is_empty());

    info!(age_group = %age_group, topic = ?topic, "devotional requested");

    let devotional = state
        .service
        .generate(DevotionalRequest::Structured { age_group, topic })
        .await
        .map_err(into_api_error)?;

    Ok(Json(StructuredDevotionalResponse {
        body: devotional.body,
        age_group: devotional.age_group,
        topic: devotional.topic,
    }))
}

/// `GET /topics` — fixed topic suggestions.
pub async fn topics_handler() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: SUGGESTED_TOPICS.to_vec(),
    })
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// `GET /` — embedded single-page request form.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionAdapter;
    use crate::usecases::ContentRetriever;

    fn test_state() -> AppState {
        AppState {
            service: Arc::new(DevotionalService::new(
                Arc::new(MockCompletionAdapter::with_delay(0)),
                ContentRetriever::fallback_only(),
            )),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let result = generate_handler(
            State(test_state()),
            Json(GenerateRequest {
                prompt: "   ".to_string(),
            }),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_rejects_short_prompt() {
        // 9 chars after trimming: validation fires before the pipeline.
        let result = generate_handler(
            State(test_state()),
            Json(GenerateRequest {
                prompt: "hi there!".to_string(),
            }),
        )
        .await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0.error.contains("more detailed request"));
    }

    #[tokio::test]
    async fn test_generate_returns_devotional() {
        let result = generate_handler(
            State(test_state()),
            Json(GenerateRequest {
                prompt: "Create a devotional for children about God's love using John 3:16"
                    .to_string(),
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(result.age_group, AgeGroup::Children);
        assert_eq!(result.scripture_reference, "John 3:16");
        assert!(result.body.is_complete());
    }

    #[tokio::test]
    async fn test_generate_devotional_rejects_unknown_age_group() {
        let result = generate_devotional_handler(
            State(test_state()),
            Json(GenerateDevotionalRequest {
                age_group: "toddlers".to_string(),
                topic: None,
            }),
        )
        .await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0.error.contains("children, teens, young_adults, adults"));
    }

    #[tokio::test]
    async fn test_generate_devotional_echoes_topic() {
        let result = generate_devotional_handler(
            State(test_state()),
            Json(GenerateDevotionalRequest {
                age_group: "teens".to_string(),
                topic: Some("Patience".to_string()),
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(result.age_group, AgeGroup::Teens);
        assert_eq!(result.topic.as_deref(), Some("Patience"));
        assert!(result.body.is_complete());
    }

    #[tokio::test]
    async fn test_topics_returns_ten_suggestions() {
        let response = topics_handler().await.0;
        assert_eq!(response.topics.len(), 10);
        assert!(response.topics.contains(&"Patience"));
    }

    #[tokio::test]
    async fn test_health_is_healthy() {
        let response = health_handler().await.0;
        assert_eq!(response.status, "healthy");
    }
}
