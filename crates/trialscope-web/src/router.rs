//! Axum router - maps all URL paths to handlers.

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    export::export,
    search::{index, search},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",       get(index))
        .route("/search", get(search))
        .route("/export", get(export))
        .route("/health", get(health))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
