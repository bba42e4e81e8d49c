use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
///
/// The `*-equivalent` paths are aliases of the `/api/*` routes.
pub fn create_router(app_state: AppState) -> Router {
    let body_limit = app_state.config.body_limit_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/lessons", post(handlers::lessons_handler))
        .route("/api/exam", post(handlers::exam_handler))
        .route("/lessons-equivalent", post(handlers::lessons_handler))
        .route("/exam-equivalent", post(handlers::exam_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
