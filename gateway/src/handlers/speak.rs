use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::tts::playht::{DEFAULT_LANGUAGE, DEFAULT_VOICE_ID};
use crate::core::tts::{PlayHtTts, PlayHtTtsConfig, TTSError};
use crate::errors::AppResult;
use crate::state::AppState;

/// Body of `POST /api/playht-voice`.
///
/// Only `text` is required. Empty strings count as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayHtVoiceRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Builds the per-request Play.ht configuration.
///
/// Engine, format and speed are fixed; the caller only picks the voice, the
/// language and optionally the API key.
fn build_tts_config(state: &AppState, request: PlayHtVoiceRequest) -> (PlayHtTtsConfig, String) {
    let (api_key, user_id) = state
        .config
        .get_playht_credentials(request.api_key.as_deref());

    let voice_id = non_empty(request.voice_id).unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());
    let language = non_empty(request.language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let config = PlayHtTtsConfig::new(api_key, user_id, voice_id).with_language(language);
    (config, request.text)
}

/// `POST /api/playht-voice`
///
/// Synthesizes `text` with Play.ht, buffers the whole audio stream and
/// answers with the MP3 bytes.
///
/// Failures answer 500 with one of two fixed messages:
/// - the request body was unusable, the vendor could not be reached or
///   answered with an error status
/// - the audio stream broke after the vendor started answering
pub async fn playht_voice_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    let request: PlayHtVoiceRequest = serde_json::from_slice(&body)
        .map_err(|e| TTSError::InvalidConfiguration(format!("Invalid request body: {e}")))?;

    let (config, text) = build_tts_config(&state, request);

    info!(
        voice = %config.voice_id,
        language = ?config.language,
        chars = text.chars().count(),
        "Play.ht speech request"
    );

    let tts = PlayHtTts::with_endpoint(
        config,
        state.http_client.clone(),
        state.config.playht_tts_url.as_str(),
    )?;
    let audio = tts.synthesize(&text).await?;

    debug!(
        bytes = audio.len(),
        chunks = audio.chunk_count,
        "Returning buffered audio"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(audio.content_type),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio.len()));

    Ok((StatusCode::OK, headers, audio.data).into_response())
}

/// `OPTIONS /api/playht-voice`
///
/// Answers every preflight the same way, independent of the request.
pub async fn playht_voice_options() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_minimal_body() {
        let request: PlayHtVoiceRequest =
            serde_json::from_str(r#"{"text": "สวัสดีครับ"}"#).unwrap();
        assert_eq!(request.text, "สวัสดีครับ");
        assert!(request.api_key.is_none());
        assert!(request.voice_id.is_none());
        assert!(request.language.is_none());
    }

    #[test]
    fn test_request_camel_case_fields() {
        let request: PlayHtVoiceRequest = serde_json::from_str(
            r#"{"apiKey": "k", "voiceId": "v", "text": "t", "language": "nl"}"#,
        )
        .unwrap();
        assert_eq!(request.api_key.as_deref(), Some("k"));
        assert_eq!(request.voice_id.as_deref(), Some("v"));
        assert_eq!(request.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_request_without_text_is_rejected() {
        assert!(serde_json::from_str::<PlayHtVoiceRequest>(r#"{"apiKey": "k"}"#).is_err());
    }

    #[test]
    fn test_build_tts_config_defaults() {
        use crate::ServerConfig;
        use crate::core::tts::PlayHtModel;

        let state = AppState::new(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            tls: None,
            pinned_practice_id: None,
            default_practice_id: "shafer-clinic".to_string(),
            playht_api_key: Some("server-key".to_string()),
            playht_user_id: Some("server-user".to_string()),
            playht_tts_url: "http://127.0.0.1:9/unused".to_string(),
            cors_allowed_origins: None,
        })
        .unwrap();

        let request: PlayHtVoiceRequest =
            serde_json::from_str(r#"{"voiceId": "", "text": "hi"}"#).unwrap();
        let (config, text) = build_tts_config(&state, request);

        assert_eq!(text, "hi");
        assert_eq!(config.api_key, "server-key");
        assert_eq!(config.user_id, "server-user");
        assert_eq!(config.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(config.voice_engine, PlayHtModel::PlayHt20Turbo);
        assert_eq!(config.language.as_deref(), Some(DEFAULT_LANGUAGE));
    }

    #[tokio::test]
    async fn test_options_headers() {
        let response = playht_voice_options().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }
}
