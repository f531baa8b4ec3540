use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequest, Multipart, Request};

use crate::Server;
use crate::error::PipelineError;

/// Buffered upload extracted from the multipart form
#[derive(Debug)]
pub(crate) struct AudioUpload {
    /// Raw audio bytes
    pub data: Vec<u8>,
    /// Original filename as sent by the client
    pub filename: String,
}

/// Extractor for the multipart `file` field
///
/// Rejections carry `PipelineError` so a malformed upload produces the same
/// structured 400 payload as every other pipeline failure.
pub(crate) struct ExtractUpload(pub AudioUpload);

impl FromRequest<Arc<Server>> for ExtractUpload {
    type Rejection = PipelineError;

    async fn from_request(request: Request, state: &Arc<Server>) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err(PipelineError::InvalidRequest(
                "expected 'Content-Type: multipart/form-data'".to_string(),
            ));
        }

        let bytes = axum::body::to_bytes(body, state.body_limit_bytes())
            .await
            .map_err(|e| PipelineError::InvalidRequest(format!("failed to read request body: {e}")))?;

        // Reassemble the request for multipart parsing
        let mut rebuilt = http::Request::builder().method(parts.method.clone()).uri(parts.uri.clone());
        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }
        let rebuilt = rebuilt
            .body(Body::from(bytes))
            .map_err(|e| PipelineError::InvalidRequest(format!("failed to rebuild request: {e}")))?;

        let mut multipart = Multipart::from_request(rebuilt, &())
            .await
            .map_err(|e| PipelineError::InvalidRequest(format!("failed to parse multipart form: {e}")))?;

        let mut data: Option<Vec<u8>> = None;
        let mut filename = String::from("audio.wav");

        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() != Some("file") {
                // Skip unknown fields
                continue;
            }

            if let Some(name) = field.file_name()
                && !name.is_empty()
            {
                filename = name.to_string();
            }

            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| PipelineError::InvalidRequest(format!("failed to read audio data: {e}")))?
                    .to_vec(),
            );
        }

        let data = data.ok_or_else(|| {
            PipelineError::InvalidRequest("missing required 'file' field in multipart form".to_string())
        })?;

        Ok(Self(AudioUpload { data, filename }))
    }
}
