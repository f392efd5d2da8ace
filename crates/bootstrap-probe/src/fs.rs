//! Filesystem capability for discovery
//!
//! Discovery only ever needs existence checks and one directory listing, so
//! that is the whole capability surface. [`NativeFileSystem`] forwards to the
//! real filesystem; [`MemoryFileSystem`] fabricates one for tests.

use std::collections::BTreeSet;
use std::path::Path;

use crate::{Error, Result};

/// Read-only filesystem access used by the discovery functions.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, in directory order.
    fn list_dir_names(&self, path: &Path) -> Result<Vec<String>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir_names(&self, path: &Path) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| Error::io(path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(path, e))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// A fabricated filesystem for probing imaginary machines in tests.
///
/// Paths are compared after normalizing separators to forward slashes, so
/// fixtures can be written with Windows-style paths on any host.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory, including all of its ancestors.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let mut normalized = normalize(path.as_ref());
        loop {
            self.dirs.insert(normalized.clone());
            match normalized.rfind('/') {
                Some(idx) if idx > 0 => normalized.truncate(idx),
                _ => break,
            }
        }
        self
    }

    /// Register a file; its parent directories are registered as well.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let normalized = normalize(path.as_ref());
        if let Some(idx) = normalized.rfind('/') {
            self = self.with_dir(&normalized[..idx]);
        }
        self.files.insert(normalized);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize(path);
        self.dirs.contains(&normalized) || self.files.contains(&normalized)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(&normalize(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(&normalize(path))
    }

    fn list_dir_names(&self, path: &Path) -> Result<Vec<String>> {
        let prefix = format!("{}/", normalize(path));
        let names = self
            .dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(String::from)
            .collect();
        Ok(names)
    }
}

fn normalize(path: &Path) -> String {
    let mut normalized = path.to_string_lossy().replace('\\', "/");
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
