use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech-to-text provider configuration
///
/// The bundled provider speaks the OpenAI-compatible `/audio/transcriptions`
/// protocol. The API key is required; config validation rejects a missing or
/// blank value at startup.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// API key for the transcription service
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (e.g. for a self-hosted Whisper server)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Transcription model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional language hint (ISO 639-1)
    #[serde(default)]
    pub language: Option<String>,
}

fn default_model() -> String {
    "whisper-1".to_string()
}
