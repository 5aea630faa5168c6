use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Headroom for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let body_limit = app_state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/upload",
            post(handlers::upload_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
