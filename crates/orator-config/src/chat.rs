use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// System instruction applied to every chat completion
const DEFAULT_SYSTEM_PROMPT: &str = "You are OratorAI, a helpful and engaging conversational \
     chatbot. Provide thoughtful, concise responses to user messages.";

/// Chat completion provider configuration
///
/// An absent API key is a recognized, handled condition: the client degrades
/// to a static reply instead of refusing to start.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Bearer token for the chat completion service
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Chat model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// System instruction sent as the first message of every request
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            system_prompt: default_system_prompt(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// API key with blank values normalized to absent
    ///
    /// Deployments often set the variable to an empty string rather than
    /// leaving it unset; both mean "not configured".
    pub fn resolved_api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().trim())
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
    }
}

fn default_model() -> String {
    "sonar-pro".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}
