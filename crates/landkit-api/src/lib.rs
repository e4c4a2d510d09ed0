//! Landkit API /v1: REST endpoints
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use landkit_core::LandkitError;
use landkit_in::{GeminiClient, TransformEngine};
use landkit_out::SiteRenderer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::ApiError;

/// Shared, immutable per-process state
pub struct AppState {
    pub engine: TransformEngine,
    pub renderer: SiteRenderer,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/campaign/validate", post(handlers::validate))
        .route("/v1/transform", post(handlers::transform))
        .route("/v1/audit", post(handlers::audit_schema))
        .route("/v1/view-model", post(handlers::view_model))
        .route("/v1/preview", post(handlers::preview))
        .route("/v1/generate", post(handlers::generate))
        .route("/v1/health", get(handlers::health))
        .with_state(Arc::new(state))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
}

/// Build the Gemini-backed state from `config` and serve until shutdown.
pub async fn run(config: AppConfig) -> Result<(), LandkitError> {
    let generator = Arc::new(GeminiClient::new(config.gemini.clone())?);
    let state = AppState {
        engine: TransformEngine::new(generator, config.generation),
        renderer: config.renderer()?,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Landkit API listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
