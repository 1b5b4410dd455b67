use footprint_core::FootprintError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting input or rendering output.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Model(#[from] FootprintError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML input: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, ShellError>`.
pub type ShellResult<T> = Result<T, ShellError>;
