use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;

use crate::types::TranscribeErrorResponse;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfacing at the upload pipeline boundary
///
/// All of them become an HTTP 400 with the structured error payload; the
/// kind tag leads the description so callers can match on the prefix.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The multipart form was missing or malformed
    #[error("{0}")]
    InvalidRequest(String),

    /// Writing the upload to disk failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The temp file vanished between write and verification
    #[error("file was not created at {path}")]
    TempFileMissing {
        /// Path that failed the post-write existence check
        path: String,
    },

    /// The transcription gateway failed
    #[error("{0}")]
    Transcription(#[from] orator_stt::SttError),
}

impl PipelineError {
    /// Kind tag leading the wire description
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::Io(_) => "IOError",
            Self::TempFileMissing { .. } => "FileNotFoundError",
            Self::Transcription(_) => "TranscriptionError",
        }
    }

    /// The single `"<Kind>: <message>"` string placed in every payload field
    pub fn describe(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> axum::response::Response {
        let description = self.describe();
        tracing::warn!(error = %description, "upload pipeline failed");

        (
            StatusCode::BAD_REQUEST,
            Json(TranscribeErrorResponse::from_description(description)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_temp_file_is_tagged_file_not_found() {
        let error = PipelineError::TempFileMissing {
            path: "/tmp/audio_x.wav".to_string(),
        };
        let description = error.describe();
        assert!(description.starts_with("FileNotFoundError:"), "{description}");
        assert!(description.contains("/tmp/audio_x.wav"));
    }

    #[test]
    fn io_error_is_tagged_io() {
        let error = PipelineError::Io(std::io::Error::other("disk full"));
        assert!(error.describe().starts_with("IOError:"));
    }

    #[test]
    fn transcription_error_keeps_upstream_detail() {
        let error = PipelineError::Transcription(orator_stt::SttError::ProviderApiError {
            status: 500,
            message: "upstream exploded".to_string(),
        });
        let description = error.describe();
        assert!(description.starts_with("TranscriptionError:"));
        assert!(description.contains("upstream exploded"));
    }
}
