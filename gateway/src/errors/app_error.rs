use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::core::tts::TTSError;

/// HTTP-facing errors.
///
/// Every variant renders as `{"error": <message>}`. Vendor failures are
/// collapsed into two fixed messages; the underlying `TTSError` is logged
/// but never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Practice not found")]
    PracticeNotFound { id: String },

    /// The speech vendor could not be reached, rejected the request, or the
    /// request body was unusable.
    #[error("Failed to connect to Play.ht Thai voice service")]
    SpeechServiceUnavailable(#[source] TTSError),

    /// The vendor started answering but the audio stream failed.
    #[error("Failed to generate Thai speech")]
    SpeechGenerationFailed(#[source] TTSError),

    #[error("Failed to render page")]
    Render(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PracticeNotFound { .. } => StatusCode::NOT_FOUND,
            Self::SpeechServiceUnavailable(_)
            | Self::SpeechGenerationFailed(_)
            | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TTSError> for AppError {
    fn from(err: TTSError) -> Self {
        match err {
            TTSError::StreamError(_) => Self::SpeechGenerationFailed(err),
            _ => Self::SpeechServiceUnavailable(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::PracticeNotFound { id } => warn!(practice_id = %id, "Practice not found"),
            Self::SpeechServiceUnavailable(source) | Self::SpeechGenerationFailed(source) => {
                error!(error = %source, "{}", self)
            }
            Self::Render(reason) => error!(reason = %reason, "{}", self),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
