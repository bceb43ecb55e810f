use axum::Json;
use serde::Serialize;

use crate::build_info::BUILD_ID;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub build_id: &'static str,
}

/// Liveness probe carrying the build identifier.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        build_id: BUILD_ID,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.build_id, BUILD_ID);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["buildId"], BUILD_ID);
    }
}
