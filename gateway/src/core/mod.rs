pub mod tts;

pub use tts::{AudioData, PlayHtTts, PlayHtTtsConfig, TTSError, TTSResult};
