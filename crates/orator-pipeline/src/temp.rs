use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{PipelineError, Result};

/// Extension used when the upload's filename has none
const DEFAULT_EXTENSION: &str = ".wav";

/// Request-scoped audio file under the temp directory
///
/// The path is `{temp_dir}/audio_{uuid}{ext}`; the UUID keeps concurrent
/// requests collision-free without any synchronization. The file must not
/// outlive the request: callers invoke `remove` once the pipeline result is
/// known, on the success and failure paths alike.
pub(crate) struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    /// Write `data` to a fresh uniquely-named file
    ///
    /// Creates the temp directory if absent (idempotent), writes the bytes,
    /// then verifies the file exists on disk. A failed verification signals a
    /// severe environment fault and maps to the `FileNotFoundError` kind.
    pub async fn create(temp_dir: &Path, original_filename: &str, data: &[u8]) -> Result<Self> {
        tokio::fs::create_dir_all(temp_dir).await?;

        let path = temp_dir.join(unique_filename(original_filename));

        tracing::debug!(path = %path.display(), bytes = data.len(), "writing upload to temp file");

        if let Err(error) = tokio::fs::write(&path, data).await {
            // A failed write can leave a partial file behind
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                let _ = tokio::fs::remove_file(&path).await;
            }
            return Err(error.into());
        }

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(PipelineError::TempFileMissing {
                path: path.display().to_string(),
            });
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file; failures are logged, never propagated
    pub async fn remove(self) {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => {
                if let Err(error) = tokio::fs::remove_file(&self.path).await {
                    tracing::warn!(path = %self.path.display(), %error, "failed to remove temp file");
                } else {
                    tracing::debug!(path = %self.path.display(), "removed temp file");
                }
            }
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to stat temp file during cleanup");
            }
        }
    }
}

/// `audio_{uuid}{ext}`, with `ext` taken from the original filename
fn unique_filename(original_filename: &str) -> String {
    format!("audio_{}{}", Uuid::new_v4(), extension_of(original_filename))
}

/// Dot-prefixed extension of `filename`, or the default when absent
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |ext| format!(".{ext}"))
}
