pub mod api;
pub mod pages;

use std::sync::Arc;

use axum::{Router, middleware, response::Response, routing::get};
use http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::build_info::{BUILD_ID, BUILD_ID_HEADER};
use crate::handlers::api::health_check;
use crate::middleware::{PRACTICE_ID_HEADER, practice_middleware};
use crate::state::AppState;

/// CORS for the practice API, built from `cors_allowed_origins`.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let practice_header = HeaderName::from_static(PRACTICE_ID_HEADER);

    match origins {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, practice_header])
            .allow_credentials(false),
        Some(origins) => {
            // Parse comma-separated origins
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, practice_header])
                .allow_credentials(true)
        }
        None => {
            info!(
                "CORS not configured for the practice API, defaulting to same-origin only. \
                 Set CORS_ALLOWED_ORIGINS to enable cross-origin access."
            );
            // No allow_origin = same-origin only (browsers block cross-origin requests)
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, practice_header])
                .allow_credentials(false)
        }
    }
}

/// Assembles the complete application router.
///
/// - `/health` and the stylesheet: no practice selection
/// - pages and the practice API: practice selection; the API also gets CORS
/// - `/api/playht-voice`: answers its own preflight
///
/// Every response carries the security headers and `X-Build-Id`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let selection = middleware::from_fn_with_state(state.clone(), practice_middleware);

    let api_routes = api::create_api_router()
        .layer(selection.clone())
        .layer(cors_layer(state.config.cors_allowed_origins.as_deref()));

    let page_routes = pages::create_page_router().layer(selection);

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(pages::create_asset_router());

    // Security headers
    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    let build_id = HeaderValue::from_str(BUILD_ID).ok();
    let build_id_header = SetResponseHeaderLayer::overriding(
        HeaderName::from_static(BUILD_ID_HEADER),
        move |_: &Response| build_id.clone(),
    );

    public_routes
        .merge(page_routes)
        .merge(api_routes)
        .merge(api::create_speech_router())
        .with_state(state)
        .layer(build_id_header)
        .layer(security_headers)
}
