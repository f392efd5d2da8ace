//! External build tool discovery
//!
//! The build tool may be installed system-wide (reachable through `PATH`) or
//! used from the copy bundled with the repository. Both candidates are always
//! recorded; the bundled fallback makes this the one probe that cannot fail.

use bootstrap_fs::NormalizedPath;
use tracing::debug;

use crate::{EnvSnapshot, FileSystem};

/// File name of the build tool executable.
pub const BUILD_TOOL_EXECUTABLE: &str = if cfg!(windows) { "FBuild.exe" } else { "fbuild" };

/// The chosen build tool installation plus both candidates it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildToolInstall {
    /// Directory of the chosen installation.
    pub path: NormalizedPath,
    /// Executable inside the chosen installation.
    pub executable_path: NormalizedPath,
    /// Directory of the `PATH` hit, when one exists.
    pub system_path: Option<NormalizedPath>,
    /// Executable inside the `PATH` hit.
    pub system_executable_path: Option<NormalizedPath>,
    /// Bundled fallback directory, recorded whether or not it exists.
    pub fallback_path: NormalizedPath,
    /// Executable inside the fallback directory.
    pub fallback_executable_path: NormalizedPath,
}

/// Locate the external build tool.
///
/// The system candidate is the first `PATH` entry containing the executable.
/// The chosen installation is that candidate when it is an existing
/// directory, otherwise the bundled fallback. Never fails.
pub fn find_build_tool(
    env: &EnvSnapshot,
    fs: &dyn FileSystem,
    fallback_dir: &NormalizedPath,
) -> BuildToolInstall {
    let system_path = env
        .search_path()
        .into_iter()
        .find(|dir| fs.is_file(&dir.join(BUILD_TOOL_EXECUTABLE)))
        .map(NormalizedPath::new);

    let chosen = match &system_path {
        Some(dir) if fs.is_dir(dir.as_ref()) => dir.clone(),
        _ => {
            debug!(fallback = %fallback_dir, "no system build tool, using bundled fallback");
            fallback_dir.clone()
        }
    };

    BuildToolInstall {
        executable_path: chosen.join(BUILD_TOOL_EXECUTABLE),
        path: chosen,
        system_executable_path: system_path
            .as_ref()
            .map(|dir| dir.join(BUILD_TOOL_EXECUTABLE)),
        system_path,
        fallback_executable_path: fallback_dir.join(BUILD_TOOL_EXECUTABLE),
        fallback_path: fallback_dir.clone(),
    }
}
