use axum::{
    Extension,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::middleware::SelectedPractice;
use crate::pages::STYLESHEET;
use crate::state::AppState;

/// `GET /`
pub async fn home_page(
    State(state): State<Arc<AppState>>,
    Extension(SelectedPractice(practice)): Extension<SelectedPractice>,
) -> AppResult<Html<String>> {
    state
        .pages
        .render_home(practice)
        .map(Html)
        .map_err(|e| AppError::Render(e.to_string()))
}

/// `GET /services`
pub async fn services_page(
    State(state): State<Arc<AppState>>,
    Extension(SelectedPractice(practice)): Extension<SelectedPractice>,
) -> AppResult<Html<String>> {
    state
        .pages
        .render_services(practice)
        .map(Html)
        .map_err(|e| AppError::Render(e.to_string()))
}

/// `GET /static/site.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        STYLESHEET,
    )
}
