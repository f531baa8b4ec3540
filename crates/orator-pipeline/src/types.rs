use serde::{Deserialize, Serialize};

/// Successful transcription payload
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeResponse {
    /// Raw transcript from the speech-to-text gateway
    pub original_text: String,
    /// Reply from the chat completion client
    pub formal_text: String,
}

/// Failure payload
///
/// Every text field carries the same `"<Kind>: <message>"` description. The
/// `formal_english` field name (vs `formal_text` on success) is part of the
/// original wire contract and is kept as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeErrorResponse {
    pub error: String,
    pub detected_language: String,
    pub original_text: String,
    pub formal_english: String,
}

impl TranscribeErrorResponse {
    /// Build the payload from a single error description
    pub fn from_description(description: String) -> Self {
        Self {
            error: description.clone(),
            detected_language: "unknown".to_string(),
            original_text: description.clone(),
            formal_english: description,
        }
    }
}
