//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while loading settings or persisting the session.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Settings could not be assembled from defaults, file and environment.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No per-user configuration directory is available on this platform.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
