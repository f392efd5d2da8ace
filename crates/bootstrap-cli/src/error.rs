//! Error types for bootstrap-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Manifest(#[from] bootstrap_manifest::Error),

    #[error(transparent)]
    Fs(#[from] bootstrap_fs::Error),

    #[error(transparent)]
    Emit(#[from] bootstrap_emit::Error),

    #[error(transparent)]
    Invoke(#[from] bootstrap_invoke::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether this failure means the repository was never initialized.
    pub fn is_manifest_absent(&self) -> bool {
        matches!(
            self,
            CliError::Manifest(bootstrap_manifest::Error::Absent { .. })
        )
    }
}
