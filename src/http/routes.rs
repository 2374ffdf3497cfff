use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the axum Router with all routes and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/webhook", post(handlers::webhook))
        .route("/orders", get(handlers::list_orders))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
