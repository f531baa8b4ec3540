use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the transcription provider is missing its API key
    /// or numeric limits are zero
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.stt.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => {}
            _ => anyhow::bail!("stt.api_key is required"),
        }

        if self.chat.timeout_secs == 0 {
            anyhow::bail!("chat.timeout_secs must be greater than 0");
        }

        if self.server.upload.body_limit_bytes == 0 {
            anyhow::bail!("server.upload.body_limit_bytes must be greater than 0");
        }

        // A blank chat key is allowed: the client degrades to a static reply.
        Ok(())
    }
}
