//! Platform SDK discovery
//!
//! The SDK root carries one subdirectory per installed version under
//! `Include/`. The selected version is the plain lexicographic maximum of
//! those names. That ordering is deliberate and load-bearing: `"9.0"`
//! outranks `"10.0"`, exactly as the build configuration expects.

use bootstrap_fs::NormalizedPath;
use tracing::debug;

use crate::{EnvSnapshot, FileSystem, Probe, Result};

/// Environment variable holding the SDK root.
pub const PLATFORM_SDK_ENV: &str = "WindowsSdkDir";

/// Default SDK root when the variable is not exported.
pub const PLATFORM_SDK_DEFAULT: &str = "C:/Program Files (x86)/Windows Kits/10";

/// A located platform SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSdkInstall {
    /// SDK root directory.
    pub path: NormalizedPath,
    /// Greatest installed version, by lexicographic string order.
    pub version: String,
}

/// Locate the platform SDK and its newest installed version.
///
/// Returns `NotFound` when the root is missing or no version subdirectory
/// exists; the caller decides whether that is fatal.
pub fn find_platform_sdk(
    env: &EnvSnapshot,
    fs: &dyn FileSystem,
) -> Result<Probe<PlatformSdkInstall>> {
    let root = NormalizedPath::new(env.get(PLATFORM_SDK_ENV).unwrap_or(PLATFORM_SDK_DEFAULT));

    if !fs.is_dir(root.as_ref()) {
        debug!(root = %root, "platform SDK root not present");
        return Ok(Probe::NotFound);
    }

    let include_dir = root.join("Include");
    if !fs.is_dir(include_dir.as_ref()) {
        return Ok(Probe::NotFound);
    }

    let versions = fs.list_dir_names(include_dir.as_ref())?;
    let Some(version) = versions.into_iter().max() else {
        debug!(include_dir = %include_dir, "platform SDK has no version subdirectories");
        return Ok(Probe::NotFound);
    };

    Ok(Probe::Found(PlatformSdkInstall {
        path: root,
        version,
    }))
}
