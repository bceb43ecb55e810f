//! Play.ht TTS configuration types.

use super::DEFAULT_MODEL;

// =============================================================================
// Voice Engine / Model
// =============================================================================

/// Play.ht voice engine (model).
///
/// Maps to Play.ht's `voice_engine` parameter in the API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayHtModel {
    /// Play 3.0 mini - fast, multilingual
    Play30Mini,
    /// PlayHT 2.0 Turbo (default)
    #[default]
    PlayHt20Turbo,
}

impl PlayHtModel {
    /// Returns the Play.ht API string for this model.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Play30Mini => "Play3.0-mini",
            Self::PlayHt20Turbo => "PlayHT2.0-turbo",
        }
    }

    /// Returns whether this model accepts the `language` parameter.
    #[inline]
    pub const fn supports_language_param(&self) -> bool {
        matches!(self, Self::Play30Mini)
    }
}

impl std::fmt::Display for PlayHtModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Play.ht TTS Configuration
// =============================================================================

/// Per-request Play.ht settings.
///
/// `language` is kept even for engines that do not accept it; the request
/// builder decides whether it goes on the wire.
#[derive(Debug, Clone)]
pub struct PlayHtTtsConfig {
    /// Sent as the `AUTHORIZATION` header
    pub api_key: String,

    /// Sent as the `X-USER-ID` header
    pub user_id: String,

    pub voice_id: String,

    pub voice_engine: PlayHtModel,

    /// ISO 639-1 language code
    pub language: Option<String>,
}

impl PlayHtTtsConfig {
    pub fn new(
        api_key: impl Into<String>,
        user_id: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: user_id.into(),
            voice_id: voice_id.into(),
            voice_engine: DEFAULT_MODEL,
            language: None,
        }
    }

    #[inline]
    pub fn with_model(mut self, model: PlayHtModel) -> Self {
        self.voice_engine = model;
        self
    }

    #[inline]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Language to put on the wire: only for engines that accept it.
    pub fn wire_language(&self) -> Option<&str> {
        if self.voice_engine.supports_language_param() {
            self.language.as_deref()
        } else {
            None
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `user_id` or `voice_id` is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() {
            return Err("user_id is required for Play.ht authentication".to_string());
        }

        if self.voice_id.is_empty() {
            return Err("voice_id is required for Play.ht".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
