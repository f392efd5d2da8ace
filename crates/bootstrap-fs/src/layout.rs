//! Fixed on-disk layout of a bootstrapped repository
//!
//! All generated artifacts live at workspace-relative locations so that every
//! command agrees on where the manifest and the build-system include file are.

use crate::NormalizedPath;

/// Name of the persisted manifest file under the build directory.
pub const MANIFEST_FILE_NAME: &str = "RepoManifest.json";

/// Name of the generated build-system include file.
pub const SYSTEM_BFF_FILE_NAME: &str = "System.bff";

/// Name of the main build configuration at the repository root.
pub const MAIN_BFF_FILE_NAME: &str = "fbuild.bff";

/// Resolved locations of a repository's generated artifacts.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    root: NormalizedPath,
}

impl RepoLayout {
    /// Create a layout rooted at the given repository directory.
    ///
    /// The root is canonicalized when it exists so manifest entries always
    /// record absolute locations.
    pub fn new(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            root: NormalizedPath::canonicalized(root),
        }
    }

    /// The repository root.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Directory holding the manifest and generated build files.
    pub fn build_dir(&self) -> NormalizedPath {
        self.root.join("Build")
    }

    /// Directory holding per-editor workspace files.
    pub fn workspace_dir(&self) -> NormalizedPath {
        self.root.join("Workspace")
    }

    /// Location of the persisted manifest.
    pub fn manifest_path(&self) -> NormalizedPath {
        self.build_dir().join(MANIFEST_FILE_NAME)
    }

    /// Location of the generated build-system include file.
    pub fn system_bff_path(&self) -> NormalizedPath {
        self.build_dir().join(SYSTEM_BFF_FILE_NAME)
    }

    /// The main build configuration consumed by the external build tool.
    pub fn main_bff_path(&self) -> NormalizedPath {
        self.root.join(MAIN_BFF_FILE_NAME)
    }

    /// Bundled fallback installation of the external build tool.
    pub fn build_tool_fallback_dir(&self) -> NormalizedPath {
        self.root.join("Utilities").join("FBuild")
    }

    /// Proxy build configuration used by the Sublime Text build system.
    pub fn sublime_proxy_bff_path(&self) -> NormalizedPath {
        self.workspace_dir().join("SublimeText3.bff")
    }

    /// Working directory for Sublime Text builds.
    pub fn sublime_working_dir(&self) -> NormalizedPath {
        self.workspace_dir().join("SublimeText3")
    }
}
