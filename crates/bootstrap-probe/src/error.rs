//! Error types for bootstrap-probe

use std::path::PathBuf;

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during discovery.
///
/// A dependency that is simply not installed is never an error; it is
/// reported as [`crate::Probe::NotFound`]. Only I/O faults while inspecting
/// an installation surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error while probing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
