use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ChatError;
use crate::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Default Perplexity API base URL
const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Reply used when no API key is configured
const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, but I'm not configured to respond right now. Please set up a chat completion API key.";

/// Client for a remote chat completions API
///
/// Credentials are injected at construction; an absent key is an explicit
/// degraded mode, not an error.
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    system_prompt: String,
}

/// Result of a completion attempt
///
/// Upstream faults are values here, not errors: the caller renders all three
/// variants as reply text, so a failed completion never fails the request
/// that carried it.
#[derive(Debug)]
pub enum ChatOutcome {
    /// The model produced a reply
    Reply(String),
    /// No API key is configured; no network I/O was attempted
    Unconfigured,
    /// The upstream call failed; carries the error description
    Failed(String),
}

impl ChatOutcome {
    /// Flatten the outcome into the text returned to the caller
    pub fn into_text(self) -> String {
        match self {
            Self::Reply(text) => text,
            Self::Unconfigured => NOT_CONFIGURED_REPLY.to_string(),
            Self::Failed(description) => {
                format!("I encountered an error while processing your message: {description}")
            }
        }
    }
}

impl ChatClient {
    /// Create a client from configuration
    pub fn from_config(config: &orator_config::ChatConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build default HTTP client");

        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |url| url.as_str().to_string());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Generate a reply to the user's message
    ///
    /// Never fails: a missing key short-circuits to `Unconfigured` before any
    /// network I/O, and upstream faults come back as `Failed`.
    pub async fn complete(&self, user_message: &str) -> ChatOutcome {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("chat completion requested but no API key is configured");
            return ChatOutcome::Unconfigured;
        };

        match self.request(api_key, user_message).await {
            Ok(reply) => ChatOutcome::Reply(reply),
            Err(error) => {
                tracing::warn!(%error, "chat completion failed; returning error text");
                ChatOutcome::Failed(error.to_string())
            }
        }
    }

    async fn request(&self, api_key: &SecretString, user_message: &str) -> Result<String, ChatError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Connection(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        parsed
            .into_reply()
            .ok_or_else(|| ChatError::MalformedResponse("response contained no choices".to_string()))
    }
}
