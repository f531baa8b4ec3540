#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod request;
mod temp;
mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use http::StatusCode;
use orator_chat::ChatClient;
use orator_stt::SpeechToText;

pub use error::{PipelineError, Result};
pub use types::{TranscribeErrorResponse, TranscribeResponse};

use request::{AudioUpload, ExtractUpload};
use temp::TempAudioFile;

/// Upload pipeline: temp-file lifecycle plus the two downstream calls
pub struct Server {
    stt: Box<dyn SpeechToText>,
    chat: ChatClient,
    temp_dir: PathBuf,
    body_limit_bytes: usize,
}

/// Build the upload pipeline from configuration
///
/// # Errors
///
/// Returns an error if the transcription gateway fails to initialize
pub fn build_server(config: &orator_config::Config) -> anyhow::Result<Arc<Server>> {
    let stt = orator_stt::build_gateway(&config.stt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcription gateway: {e}"))?;

    Ok(Arc::new(Server {
        stt,
        chat: ChatClient::from_config(&config.chat),
        temp_dir: config.server.upload.temp_dir(),
        body_limit_bytes: config.server.upload.body_limit_bytes,
    }))
}

/// Create the endpoint router for the upload pipeline
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/transcribe", post(transcribe))
}

/// Handle audio upload requests
///
/// The 200-vs-400 decision is an explicit branch on the pipeline result.
async fn transcribe(State(server): State<Arc<Server>>, ExtractUpload(upload): ExtractUpload) -> axum::response::Response {
    match server.handle_upload(upload).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(error) => error.into_response(),
    }
}

impl Server {
    pub(crate) const fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes
    }

    /// Run the pipeline for one upload, guaranteeing temp-file cleanup
    async fn handle_upload(&self, upload: AudioUpload) -> Result<TranscribeResponse> {
        let temp = TempAudioFile::create(&self.temp_dir, &upload.filename, &upload.data).await?;

        let result = self.transcribe_and_reply(temp.path()).await;

        // Cleanup runs before the result is inspected, success or failure
        temp.remove().await;

        result
    }

    async fn transcribe_and_reply(&self, path: &Path) -> Result<TranscribeResponse> {
        let original_text = self.stt.transcribe(path).await?;

        tracing::debug!(chars = original_text.len(), "transcription complete");

        // Infallible by design: upstream chat faults arrive as reply text
        let formal_text = self.chat.complete(&original_text).await.into_text();

        Ok(TranscribeResponse {
            original_text,
            formal_text,
        })
    }
}
