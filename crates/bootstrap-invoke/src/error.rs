//! Error types for bootstrap-invoke

/// Result type for invocation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while launching the external build tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The child process could not be started at all.
    #[error("failed to launch build tool: `{command}`: {source}")]
    Spawn {
        /// The attempted command line, for the diagnostic.
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] bootstrap_fs::Error),
}
