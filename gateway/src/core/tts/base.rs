use std::fmt::Display;

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum TTSError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// The provider accepted the request but the audio stream broke.
    #[error("Audio stream error: {0}")]
    StreamError(String),
}

pub type TTSResult<T> = Result<T, TTSError>;

/// Fully buffered synthesis result.
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio bytes, in the order the provider streamed them
    pub data: Bytes,
    /// MIME type for the `Content-Type` header
    pub content_type: &'static str,
    /// Number of chunks the provider streamed
    pub chunk_count: usize,
}

impl AudioData {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builds the HTTP request for one synthesis call.
pub trait TTSRequestBuilder {
    fn build_http_request(&self, client: &reqwest::Client, text: &str) -> reqwest::RequestBuilder;
}

/// Drains an audio byte stream into one contiguous buffer.
///
/// Chunks are appended in arrival order. The first stream error aborts
/// collection and the partial buffer is discarded, so callers never see
/// truncated audio. There is no size bound.
pub async fn collect_audio<S, E>(stream: S) -> TTSResult<(Bytes, usize)>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = BytesMut::new();
    let mut chunk_count = 0usize;

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                chunk_count += 1;
                buffer.extend_from_slice(&bytes);
            }
            Err(e) => {
                warn!(
                    chunks_received = chunk_count,
                    bytes_received = buffer.len(),
                    "Audio stream failed: {e}"
                );
                return Err(TTSError::StreamError(e.to_string()));
            }
        }
    }

    debug!(
        chunks = chunk_count,
        bytes = buffer.len(),
        "Audio stream complete"
    );
    Ok((buffer.freeze(), chunk_count))
}
