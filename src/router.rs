//! Router configuration for the portfolio API.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::aggregator::Aggregator;
use crate::config::AppConfig;
use crate::error::Result;
use crate::handlers;

/// Shared state for all handlers. Configuration is read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub aggregator: Aggregator,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let config = Arc::new(config);
        let aggregator = Aggregator::new(Arc::clone(&config))?;
        Ok(Self { config, aggregator })
    }
}

/// Build the application router. Every route lives under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/auth-token",
            get(handlers::auth::get_token).post(handlers::auth::issue_token),
        )
        .route("/profile", get(handlers::profile::get_profile))
        .route("/placeholder/:kind", get(handlers::placeholder::get_placeholder))
        .route(
            "/placeholder/:kind/:identifier",
            get(handlers::placeholder::get_placeholder),
        )
        .route(
            "/placeholder/:kind/:identifier/:size",
            get(handlers::placeholder::get_placeholder),
        )
        .route("/screenshot", get(handlers::screenshot::get_screenshot));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
