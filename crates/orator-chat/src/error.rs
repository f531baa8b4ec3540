use thiserror::Error;

/// Errors from the chat completion upstream
///
/// These never cross the crate boundary as errors: `ChatClient::complete`
/// flattens them into `ChatOutcome::Failed` so a broken upstream cannot fail
/// an otherwise successful transcription request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never reached the provider (includes timeouts)
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider rejected the request
    #[error("provider returned {status}: {message}")]
    UpstreamStatus {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// The provider response body did not match the expected shape
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
