//! Play.ht TTS request builder and provider implementation.
//!
//! # Architecture
//!
//! `PlayHtRequestBuilder` constructs the HTTP request for the Play.ht
//! streaming endpoint:
//! - URL: `https://api.play.ht/api/v2/tts/stream` (overridable)
//! - Authentication: `X-USER-ID` + `AUTHORIZATION` headers
//! - Content-Type: `application/json`
//!
//! `PlayHtTts` sends that request with a shared `reqwest::Client`, checks the
//! status and exposes the response body either as a chunk stream or, via
//! [`PlayHtTts::synthesize`], as one buffered payload.

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use super::config::PlayHtTtsConfig;
use super::messages::{PlayHtApiError, PlayHtTtsRequest};
use super::{AUDIO_CONTENT_TYPE, OUTPUT_FORMAT, PLAYHT_TTS_URL, SPEED};
use crate::core::tts::{AudioData, TTSError, TTSRequestBuilder, TTSResult, collect_audio};

// =============================================================================
// PlayHtRequestBuilder
// =============================================================================

#[derive(Debug, Clone)]
pub struct PlayHtRequestBuilder {
    /// Play.ht-specific configuration (voice_engine, user_id, etc.)
    playht_config: PlayHtTtsConfig,

    /// Streaming endpoint URL
    endpoint: String,
}

impl PlayHtRequestBuilder {
    pub fn new(playht_config: PlayHtTtsConfig, endpoint: impl Into<String>) -> Self {
        Self {
            playht_config,
            endpoint: endpoint.into(),
        }
    }

    /// Builds the JSON request body. `text` is forwarded untouched.
    pub fn build_request_body(&self, text: &str) -> PlayHtTtsRequest {
        let config = &self.playht_config;
        let mut body = PlayHtTtsRequest::new(
            &config.voice_id,
            text,
            config.voice_engine.as_str(),
            OUTPUT_FORMAT,
            SPEED,
        );
        body.language = config.wire_language().map(str::to_string);

        if body.language.is_none() {
            if let Some(lang) = &config.language {
                debug!(
                    language = %lang,
                    voice_engine = %config.voice_engine,
                    "Voice engine does not take a language parameter, not forwarding it"
                );
            }
        }

        body
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TTSRequestBuilder for PlayHtRequestBuilder {
    /// Build the Play.ht TTS HTTP request with URL, headers, and JSON body.
    ///
    /// **Headers**:
    /// | Header | Value | Purpose |
    /// |--------|-------|---------|
    /// | X-USER-ID | {user_id} | User identification |
    /// | AUTHORIZATION | {api_key} | API authentication |
    /// | Content-Type | application/json | Request body format |
    /// | Accept | audio/mpeg | Response format |
    fn build_http_request(&self, client: &reqwest::Client, text: &str) -> reqwest::RequestBuilder {
        let body = self.build_request_body(text);

        debug!(
            "Building Play.ht TTS request: voice={}, voice_engine={}",
            self.playht_config.voice_id, self.playht_config.voice_engine,
        );

        client
            .post(&self.endpoint)
            .header("X-USER-ID", &self.playht_config.user_id)
            .header("AUTHORIZATION", &self.playht_config.api_key)
            .header("Accept", AUDIO_CONTENT_TYPE)
            .json(&body)
    }
}

// =============================================================================
// PlayHtTts Provider
// =============================================================================

/// Play.ht Text-to-Speech provider.
///
/// Cheap to build per request: it borrows nothing and clones a pooled
/// `reqwest::Client` handle.
#[derive(Debug, Clone)]
pub struct PlayHtTts {
    client: reqwest::Client,
    request_builder: PlayHtRequestBuilder,
}

impl PlayHtTts {
    /// Creates a provider against the public Play.ht endpoint.
    ///
    /// # Errors
    /// `TTSError::InvalidConfiguration` when the configuration does not validate.
    pub fn with_config(playht_config: PlayHtTtsConfig, client: reqwest::Client) -> TTSResult<Self> {
        Self::with_endpoint(playht_config, client, PLAYHT_TTS_URL)
    }

    /// Creates a provider against a custom streaming endpoint.
    pub fn with_endpoint(
        playht_config: PlayHtTtsConfig,
        client: reqwest::Client,
        endpoint: impl Into<String>,
    ) -> TTSResult<Self> {
        playht_config
            .validate()
            .map_err(TTSError::InvalidConfiguration)?;

        let request_builder = PlayHtRequestBuilder::new(playht_config, endpoint);

        debug!(
            voice = %request_builder.playht_config.voice_id,
            voice_engine = %request_builder.playht_config.voice_engine,
            endpoint = request_builder.endpoint(),
            "Created PlayHtTts provider"
        );

        Ok(Self {
            client,
            request_builder,
        })
    }

    /// Returns a reference to the Play.ht-specific configuration.
    #[inline]
    pub fn playht_config(&self) -> &PlayHtTtsConfig {
        &self.request_builder.playht_config
    }

    /// Starts synthesis and returns the audio as a stream of chunks.
    ///
    /// # Errors
    /// - `TTSError::ConnectionFailed` when the request cannot be sent
    /// - `TTSError::ProviderError` when Play.ht answers with a non-success status
    ///
    /// Chunk errors inside the stream surface as `TTSError::StreamError`.
    pub async fn stream(&self, text: &str) -> TTSResult<BoxStream<'static, TTSResult<Bytes>>> {
        let response = self
            .request_builder
            .build_http_request(&self.client, text)
            .send()
            .await
            .map_err(|e| TTSError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.ok();
            return Err(Self::error_from_response(status.as_u16(), body.as_deref()));
        }

        Ok(response
            .bytes_stream()
            .map_err(|e| TTSError::StreamError(e.to_string()))
            .boxed())
    }

    /// Synthesizes `text` and buffers the whole audio stream in memory.
    ///
    /// Returns nothing partial: a stream error discards what was received.
    pub async fn synthesize(&self, text: &str) -> TTSResult<AudioData> {
        let stream = self.stream(text).await?;
        let (data, chunk_count) = collect_audio(stream).await?;

        info!(
            bytes = data.len(),
            chunks = chunk_count,
            "Play.ht synthesis complete"
        );

        Ok(AudioData {
            data,
            content_type: AUDIO_CONTENT_TYPE,
            chunk_count,
        })
    }

    /// Parses a Play.ht API error response body into a structured error.
    pub fn parse_api_error(response_body: &[u8]) -> Option<PlayHtApiError> {
        serde_json::from_slice::<PlayHtApiError>(response_body)
            .ok()
            .filter(|error| error.message.is_some() || error.code.is_some())
    }

    /// Converts an HTTP status code and response body into a descriptive error.
    pub fn error_from_response(status: u16, response_body: Option<&[u8]>) -> TTSError {
        let api_error = response_body.and_then(Self::parse_api_error);

        let message = match (status, &api_error) {
            (401, Some(err)) => format!(
                "Play.ht authentication failed: {}. Verify your API key and user ID.",
                err
            ),
            (401, None) => {
                "Play.ht authentication failed. Verify your API key (AUTHORIZATION header) and user ID (X-USER-ID header).".to_string()
            }
            (403, Some(err)) => format!("Play.ht access denied: {}", err),
            (403, None) => "Play.ht access denied. Check your subscription tier.".to_string(),
            (404, Some(err)) => format!("Play.ht resource not found: {}", err),
            (404, None) => "Play.ht voice not found. Verify the voice ID is correct.".to_string(),
            (429, Some(err)) => format!("Play.ht rate limit exceeded: {}", err),
            (429, None) => "Play.ht rate limit exceeded.".to_string(),
            (500..=599, Some(err)) => format!("Play.ht server error ({}): {}", status, err),
            (500..=599, None) => format!("Play.ht server error ({})", status),
            (_, Some(err)) => format!("Play.ht API error ({}): {}", status, err),
            (_, None) => format!("Play.ht API request failed with status {}", status),
        };

        if let Some(err) = &api_error {
            warn!(
                status = status,
                error_message = ?err.message,
                error_code = ?err.code,
                "Play.ht API error"
            );
        }

        TTSError::ProviderError(message)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tts::playht::PlayHtModel;

    fn create_test_config() -> PlayHtTtsConfig {
        PlayHtTtsConfig::new("test-api-key", "test-user", "thai-lady-J0JZKhhZhpgpwebqoE3zQ")
            .with_language("th")
    }

    #[test]
    fn test_request_body_defaults() {
        let builder = PlayHtRequestBuilder::new(create_test_config(), PLAYHT_TTS_URL);
        let body = builder.build_request_body("สวัสดี");

        assert_eq!(body.voice, "thai-lady-J0JZKhhZhpgpwebqoE3zQ");
        assert_eq!(body.text, "สวัสดี");
        assert_eq!(body.voice_engine, "PlayHT2.0-turbo");
        assert_eq!(body.output_format, "mp3");
        assert!((body.speed - 1.0).abs() < 0.001);
        // Turbo does not take a language parameter
        assert!(body.language.is_none());
    }

    #[test]
    fn test_request_body_forwards_language_for_mini() {
        let config = create_test_config().with_model(PlayHtModel::Play30Mini);
        let builder = PlayHtRequestBuilder::new(config, PLAYHT_TTS_URL);
        let body = builder.build_request_body("hello");
        assert_eq!(body.language.as_deref(), Some("th"));
    }

    #[test]
    fn test_build_http_request_headers() {
        let builder = PlayHtRequestBuilder::new(create_test_config(), "http://localhost:9/tts");
        let client = reqwest::Client::new();
        let request = builder.build_http_request(&client, "hello").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:9/tts");
        assert_eq!(request.headers()["X-USER-ID"], "test-user");
        assert_eq!(request.headers()["AUTHORIZATION"], "test-api-key");
        assert_eq!(request.headers()["Accept"], "audio/mpeg");
        assert_eq!(request.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = PlayHtTtsConfig::new("test-api-key", "user", "");
        let result = PlayHtTts::with_config(config, reqwest::Client::new());
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_request_body_keeps_long_text() {
        let builder = PlayHtRequestBuilder::new(create_test_config(), PLAYHT_TTS_URL);
        let text = "ก".repeat(25_000);
        let body = builder.build_request_body(&text);
        assert_eq!(body.text.chars().count(), 25_000);
    }

    #[test]
    fn test_parse_api_error() {
        let parsed = PlayHtTts::parse_api_error(br#"{"error_message": "bad voice"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("bad voice"));

        assert!(PlayHtTts::parse_api_error(b"{}").is_none());
        assert!(PlayHtTts::parse_api_error(b"not json").is_none());
    }

    #[test]
    fn test_error_from_response() {
        match PlayHtTts::error_from_response(401, None) {
            TTSError::ProviderError(msg) => assert!(msg.contains("authentication failed")),
            other => panic!("Expected ProviderError, got: {:?}", other),
        }

        match PlayHtTts::error_from_response(503, Some(br#"{"message": "overloaded"}"#)) {
            TTSError::ProviderError(msg) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("overloaded"));
            }
            other => panic!("Expected ProviderError, got: {:?}", other),
        }
    }
}
