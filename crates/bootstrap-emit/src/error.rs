//! Error types for bootstrap-emit

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering generated files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode project file: {0}")]
    Encode(#[from] serde_json::Error),
}
