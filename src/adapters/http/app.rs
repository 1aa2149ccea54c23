//! Router assembly. Routes, shared state, CORS and trace layers.

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::http::routes::{
    generate_devotional_handler, generate_handler, health_handler, index_handler, topics_handler,
    AppState,
};
use crate::usecases::DevotionalService;

/// Build the application router around a shared service handle.
pub fn build_router(service: Arc<DevotionalService>) -> Router {
    let state = AppState { service };

    // Permissive CORS: the form page may be served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/generate-devotional", post(generate_devotional_handler))
        .route("/topics", get(topics_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
