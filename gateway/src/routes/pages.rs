use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::pages;
use crate::pages::STYLESHEET_PATH;
use crate::state::AppState;
use std::sync::Arc;

/// Create the page router
///
/// The practice selection middleware is applied in `build_router`.
pub fn create_page_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pages::home_page))
        .route("/services", get(pages::services_page))
        .layer(TraceLayer::new_for_http())
}

/// Create the static asset router (no practice selection)
pub fn create_asset_router() -> Router<Arc<AppState>> {
    Router::new().route(STYLESHEET_PATH, get(pages::stylesheet))
}
