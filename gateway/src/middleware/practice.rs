use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::practice::{PracticeConfig, subdomain_from_host};
use crate::state::AppState;

/// Header that selects a practice explicitly, ahead of the `Host` header.
pub const PRACTICE_ID_HEADER: &str = "x-practice-id";

/// The practice resolved for the current request.
#[derive(Debug, Clone, Copy)]
pub struct SelectedPractice(pub &'static PracticeConfig);

/// Extracts the selection key for a request.
///
/// Priority:
/// 1. `X-Practice-Id` header
/// 2. Subdomain of the `Host` header (or of the URI authority for HTTP/2)
fn selection_key(headers: &HeaderMap, uri_host: Option<&str>) -> Option<String> {
    if let Some(id) = headers
        .get(PRACTICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return Some(id.to_string());
    }

    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or(uri_host)
        .and_then(subdomain_from_host)
}

/// Resolves the practice once per request and stores it as a
/// [`SelectedPractice`] extension.
///
/// A pinned deployment ignores the selection key. Unknown keys fall back to
/// the default practice; there is no error path.
pub async fn practice_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let key = selection_key(request.headers(), request.uri().host());
    let practice = state.registry.current(key.as_deref());

    tracing::debug!(
        key = ?key,
        practice_id = practice.id,
        pinned = state.registry.is_pinned(),
        "Practice selected"
    );

    request.extensions_mut().insert(SelectedPractice(practice));
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_selection_key_from_host() {
        let map = headers(&[("host", "shafer-clinic.example.com")]);
        assert_eq!(
            selection_key(&map, None),
            Some("shafer-clinic".to_string())
        );
    }

    #[test]
    fn test_selection_key_bare_host() {
        let map = headers(&[("host", "localhost:3000")]);
        assert_eq!(selection_key(&map, None), None);
    }

    #[test]
    fn test_selection_key_header_wins() {
        let map = headers(&[
            ("host", "shafer-clinic.example.com"),
            ("x-practice-id", "arena-fysio-amsterdam"),
        ]);
        assert_eq!(
            selection_key(&map, None),
            Some("arena-fysio-amsterdam".to_string())
        );
    }

    #[test]
    fn test_selection_key_blank_header_ignored() {
        let map = headers(&[("host", "arena-fysio-amsterdam.localhost"), ("x-practice-id", " ")]);
        assert_eq!(
            selection_key(&map, None),
            Some("arena-fysio-amsterdam".to_string())
        );
    }

    #[test]
    fn test_selection_key_uri_authority_fallback() {
        let map = HeaderMap::new();
        assert_eq!(
            selection_key(&map, Some("shafer-clinic.example.com")),
            Some("shafer-clinic".to_string())
        );
        assert_eq!(selection_key(&map, None), None);
    }
}
