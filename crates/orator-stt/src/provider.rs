pub(crate) mod whisper;

use std::path::Path;

use async_trait::async_trait;

/// Contract consumed by the upload pipeline: bytes on disk in, text out
///
/// One call per request. Model selection, loading, and caching are the
/// implementation's concern.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe the audio file at `path` to plain text
    async fn transcribe(&self, path: &Path) -> crate::error::Result<String>;
}
