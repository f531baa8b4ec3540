use std::path::PathBuf;

use serde::Deserialize;

/// Default body limit for audio uploads (32 MiB)
const DEFAULT_BODY_LIMIT_BYTES: usize = 32 << 20;

/// Upload handling configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    /// Directory for transient audio files; defaults to the OS temp directory
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Maximum accepted upload body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl UploadConfig {
    /// Resolve the temp directory, falling back to the OS default
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

const fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT_BYTES
}
