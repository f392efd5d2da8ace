//! Graphics SDK discovery
//!
//! The SDK exports one of two environment variables depending on installer
//! vintage; the first takes precedence. Install directories are named after
//! the version they contain, so the version is the trailing path segment.

use bootstrap_fs::NormalizedPath;
use tracing::debug;

use crate::{EnvSnapshot, FileSystem, Probe};

/// Primary environment variable holding the SDK root.
pub const GRAPHICS_SDK_ENV: &str = "VULKAN_SDK";

/// Alternate variable set by older installers.
pub const GRAPHICS_SDK_ENV_ALT: &str = "VK_SDK_PATH";

/// Hard-coded install location tried when neither variable is exported.
pub const GRAPHICS_SDK_DEFAULT: &str = "C:/VulkanSDK/1.0.68.0";

/// A located graphics SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsSdkInstall {
    /// SDK root directory.
    pub path: NormalizedPath,
    /// Version, taken from the trailing path segment of the root.
    pub version: String,
}

/// Locate the graphics SDK, if installed.
pub fn find_graphics_sdk(env: &EnvSnapshot, fs: &dyn FileSystem) -> Probe<GraphicsSdkInstall> {
    let root = NormalizedPath::new(
        env.get(GRAPHICS_SDK_ENV)
            .or_else(|| env.get(GRAPHICS_SDK_ENV_ALT))
            .unwrap_or(GRAPHICS_SDK_DEFAULT),
    );

    if !fs.exists(root.as_ref()) {
        debug!(root = %root, "graphics SDK root not present");
        return Probe::NotFound;
    }

    match root.file_name() {
        Some(version) if !version.is_empty() => Probe::Found(GraphicsSdkInstall {
            version: version.to_string(),
            path: root,
        }),
        _ => Probe::NotFound,
    }
}
