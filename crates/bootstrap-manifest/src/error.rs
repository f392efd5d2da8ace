//! Error types for bootstrap-manifest

use bootstrap_fs::NormalizedPath;

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in manifest operations.
///
/// `Absent` is a normal, recoverable condition (the repository was never
/// initialized); `Malformed` is not. Callers must keep the two apart.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no manifest at {path}")]
    Absent { path: NormalizedPath },

    #[error("malformed manifest at {path}: {message}")]
    Malformed {
        path: NormalizedPath,
        message: String,
    },

    #[error("mandatory dependency not found: {name}")]
    MissingDependency { name: &'static str },

    #[error("failed to encode manifest: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Fs(#[from] bootstrap_fs::Error),

    #[error(transparent)]
    Probe(#[from] bootstrap_probe::Error),
}
