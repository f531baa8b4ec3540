//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::PathBuf;

use orator_config::{ChatConfig, Config, ServerConfig, SttConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                stt: SttConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..SttConfig::default()
                },
                chat: ChatConfig::default(),
            },
        }
    }

    /// Point the transcription provider at a mock backend
    pub fn with_stt(mut self, base_url: &str) -> Self {
        self.config.stt.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the chat client at a mock backend with a key configured
    pub fn with_chat(mut self, base_url: &str) -> Self {
        self.config.chat.api_key = Some(SecretString::from("test-key"));
        self.config.chat.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the chat client at a mock backend without configuring a key
    pub fn with_unconfigured_chat(mut self, base_url: &str) -> Self {
        self.config.chat.api_key = None;
        self.config.chat.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Route temp files into a caller-owned directory
    pub fn with_temp_dir(mut self, path: PathBuf) -> Self {
        self.config.server.upload.temp_dir = Some(path);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
