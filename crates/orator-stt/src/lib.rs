#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;

pub use error::{Result, SttError};
pub use provider::SpeechToText;
use provider::whisper::WhisperTranscriber;
use secrecy::ExposeSecret;

/// Build the transcription gateway from configuration
///
/// # Errors
///
/// Returns an error if the provider configuration is incomplete
pub fn build_gateway(config: &orator_config::SttConfig) -> Result<Box<dyn SpeechToText>> {
    let api_key = config
        .api_key
        .as_ref()
        .filter(|key| !key.expose_secret().trim().is_empty())
        .cloned()
        .ok_or_else(|| SttError::ConfigError("API key required for transcription provider".to_string()))?;

    Ok(Box::new(WhisperTranscriber::new(
        api_key,
        config.base_url.as_ref().map(|url| url.as_str().to_string()),
        config.model.clone(),
        config.language.clone(),
    )))
}
