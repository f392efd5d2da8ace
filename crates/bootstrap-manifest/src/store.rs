//! Manifest persistence
//!
//! Load keeps "file is missing" and "file is garbage" strictly apart: the
//! former is how every consumer learns the repository was never initialized,
//! the latter is a fault that must be reported loudly. Save goes through the
//! atomic-write discipline so readers never observe a partial manifest.

use bootstrap_fs::{NormalizedPath, io};
use tracing::debug;

use crate::{Error, Manifest, Result};

/// Load the manifest at `path`.
///
/// Returns [`Error::Absent`] when the file does not exist and
/// [`Error::Malformed`] when it exists but does not parse as the expected
/// schema.
pub fn load(path: &NormalizedPath) -> Result<Manifest> {
    if !path.is_file() {
        return Err(Error::Absent { path: path.clone() });
    }

    let content = io::read_text(path)?;
    let manifest = serde_json::from_str(&content).map_err(|e| Error::Malformed {
        path: path.clone(),
        message: e.to_string(),
    })?;

    debug!(path = %path, "loaded manifest");
    Ok(manifest)
}

/// Serialize and write the manifest atomically, creating parent directories.
pub fn save(path: &NormalizedPath, manifest: &Manifest) -> Result<()> {
    let mut content = serde_json::to_string_pretty(manifest)?;
    content.push('\n');
    io::write_atomic(path, content.as_bytes())?;
    debug!(path = %path, "saved manifest");
    Ok(())
}

/// Whether a manifest file exists at `path`.
///
/// Used by the builder's overwrite guard.
pub fn exists(path: &NormalizedPath) -> bool {
    path.is_file()
}
