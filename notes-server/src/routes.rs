//! Route definitions.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// API routes, with the UI bundle served for every other path.
pub fn create_router(state: Arc<AppState>) -> Router {
    let bundle = ServeDir::new(&state.config.dist_dir);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/notes", get(handlers::list_notes))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
