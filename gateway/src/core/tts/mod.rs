mod base;
pub mod playht;

pub use base::{AudioData, TTSError, TTSRequestBuilder, TTSResult, collect_audio};
pub use playht::{PLAYHT_TTS_URL, PlayHtModel, PlayHtTts, PlayHtTtsConfig};
