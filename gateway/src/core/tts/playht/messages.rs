//! Play.ht API message types.

use serde::{Deserialize, Serialize};

// =============================================================================
// TTS Request
// =============================================================================

/// Body of `POST /api/v2/tts/stream`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayHtTtsRequest {
    /// Voice ID to use for synthesis
    pub voice: String,

    /// Text to synthesize, forwarded as received
    pub text: String,

    /// Voice engine/model to use
    pub voice_engine: String,

    /// Output audio format
    pub output_format: String,

    pub speed: f32,

    /// Language code (Play3.0-mini only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PlayHtTtsRequest {
    /// Creates a new TTS request with required fields.
    pub fn new(
        voice: impl Into<String>,
        text: impl Into<String>,
        voice_engine: impl Into<String>,
        output_format: impl Into<String>,
        speed: f32,
    ) -> Self {
        Self {
            voice: voice.into(),
            text: text.into(),
            voice_engine: voice_engine.into(),
            output_format: output_format.into(),
            speed,
            language: None,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by the Play.ht API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayHtApiError {
    /// Error message
    #[serde(alias = "error_message")]
    pub message: Option<String>,

    /// Error code
    #[serde(alias = "error_code")]
    pub code: Option<String>,
}

impl std::fmt::Display for PlayHtApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "{}", msg)
        } else if let Some(code) = &self.code {
            write!(f, "Error code: {}", code)
        } else {
            write!(f, "Unknown Play.ht API error")
        }
    }
}

impl std::error::Error for PlayHtApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tts_request_skips_unset_options() {
        let request = PlayHtTtsRequest::new("voice", "hello", "PlayHT2.0-turbo", "mp3", 1.0);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["voice"], "voice");
        assert_eq!(json["voice_engine"], "PlayHT2.0-turbo");
        assert_eq!(json["output_format"], "mp3");
        assert_eq!(json["speed"], 1.0);
        assert!(json.get("language").is_none());
    }

    #[test]
    fn test_api_error_aliases() {
        let err: PlayHtApiError =
            serde_json::from_str(r#"{"error_message": "Invalid voice", "error_code": "E42"}"#)
                .unwrap();
        assert_eq!(err.message.as_deref(), Some("Invalid voice"));
        assert_eq!(err.code.as_deref(), Some("E42"));
        assert_eq!(err.to_string(), "Invalid voice");
    }

    #[test]
    fn test_api_error_display_fallbacks() {
        let err: PlayHtApiError = serde_json::from_str(r#"{"code": "E1"}"#).unwrap();
        assert_eq!(err.to_string(), "Error code: E1");

        let err: PlayHtApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(err.to_string(), "Unknown Play.ht API error");
    }
}
