use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for kl-manifest operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The examples directory to scan is absent or not a directory.
    #[error("Directory {} does not exist.", path.display())]
    MissingDirectory { path: PathBuf },

    /// No manifest has been generated at the expected location.
    #[error("Manifest {} does not exist. Run 'kl-manifest generate' first.", path.display())]
    ManifestMissing { path: PathBuf },

    /// Manifest JSON could not be produced or parsed.
    #[error("Manifest JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
