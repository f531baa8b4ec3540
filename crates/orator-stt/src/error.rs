use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Errors that can occur while transcribing audio
#[derive(Debug, Error)]
pub enum SttError {
    /// Provider configuration is incomplete
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The audio file could not be read from disk
    #[error("failed to read audio file: {0}")]
    ReadAudio(#[from] std::io::Error),

    /// The request never reached the provider
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The provider rejected the request
    #[error("provider returned {status}: {message}")]
    ProviderApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// The provider response body did not match the expected shape
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
