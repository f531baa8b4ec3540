use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{error::SttError, http_client::http_client};

use super::SpeechToText;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible Whisper transcription provider
pub(crate) struct WhisperTranscriber {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    language: Option<String>,
}

impl WhisperTranscriber {
    pub fn new(api_key: SecretString, base_url: Option<String>, model: String, language: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            language,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl SpeechToText for WhisperTranscriber {
    async fn transcribe(&self, path: &Path) -> crate::error::Result<String> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map_or_else(|| "audio.wav".to_string(), |name| name.to_string_lossy().to_string());

        tracing::debug!("Whisper transcription request: {} bytes, model={}", audio.len(), self.model);

        let mut form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(audio).file_name(filename))
            .text("model", self.model.clone());

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::ConnectionError(format!("Failed to send request to Whisper: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Whisper API error ({status}): {error_text}");

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!("Whisper transcription complete");

        Ok(result.text)
    }
}
