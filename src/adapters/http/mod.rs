//! HTTP adapter. The inbound edge: axum router and handlers.

pub mod app;
pub mod routes;

pub use app::build_router;
pub use routes::AppState;
