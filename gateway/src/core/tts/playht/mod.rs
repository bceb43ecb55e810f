//! Play.ht TTS provider implementation.
//!
//! Synthesizes speech through the Play.ht HTTP streaming endpoint and buffers
//! the streamed audio into a single payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use practice_gateway::core::tts::playht::{PlayHtTts, PlayHtTtsConfig};
//!
//! let config = PlayHtTtsConfig::new(
//!     "your-playht-api-key",
//!     "your-user-id",
//!     "thai-lady-J0JZKhhZhpgpwebqoE3zQ",
//! )
//! .with_language("th");
//! let tts = PlayHtTts::with_config(config, reqwest::Client::new())?;
//! let audio = tts.synthesize("สวัสดีครับ").await?;
//! ```
//!
//! # Authentication
//!
//! Play.ht uses dual-header authentication:
//! - `X-USER-ID`: Your Play.ht user ID
//! - `AUTHORIZATION`: Your Play.ht API key

pub mod config;
pub mod messages;
pub mod provider;

pub use config::{PlayHtModel, PlayHtTtsConfig};
pub use messages::{PlayHtApiError, PlayHtTtsRequest};
pub use provider::{PlayHtRequestBuilder, PlayHtTts};

// =============================================================================
// API Constants
// =============================================================================

/// Play.ht TTS HTTP streaming endpoint.
pub const PLAYHT_TTS_URL: &str = "https://api.play.ht/api/v2/tts/stream";

// =============================================================================
// Credentials
// =============================================================================

/// API key used when neither the caller nor the server configuration
/// supplies one.
pub const FALLBACK_API_KEY: &str = "9a1ffef880fd4dab94c34d49267812b3";

/// User ID used when the server configuration does not supply one.
pub const FALLBACK_USER_ID: &str = "your-user-id";

// =============================================================================
// Defaults
// =============================================================================

/// Default model (voice engine).
pub const DEFAULT_MODEL: PlayHtModel = PlayHtModel::PlayHt20Turbo;

/// Voice used when the caller does not pick one.
pub const DEFAULT_VOICE_ID: &str = "thai-lady-J0JZKhhZhpgpwebqoE3zQ";

/// Language assumed when the caller does not send one.
pub const DEFAULT_LANGUAGE: &str = "th";

/// Playback speed sent with every request.
pub const SPEED: f32 = 1.0;

/// Output format sent with every request.
pub const OUTPUT_FORMAT: &str = "mp3";

/// MIME type of [`OUTPUT_FORMAT`], used upstream as `Accept` and downstream
/// as `Content-Type`.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
