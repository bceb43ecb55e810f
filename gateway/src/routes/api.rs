use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::{practice, speak};
use crate::state::AppState;
use std::sync::Arc;

/// Create the practice API router
///
/// Note: the practice selection middleware and CORS are applied in
/// `build_router` after state is available
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/practice", get(practice::current_practice))
        .route("/api/practice/assistant", get(practice::assistant_script))
        .route("/api/practices", get(practice::list_practices))
        .route("/api/practices/{id}", get(practice::get_practice))
        .layer(TraceLayer::new_for_http())
}

/// Create the Play.ht speech proxy router
///
/// Answers its own preflight requests, so it sits outside the CORS layer.
pub fn create_speech_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/playht-voice",
            post(speak::playht_voice_handler).options(speak::playht_voice_options),
        )
        .layer(TraceLayer::new_for_http())
}
