//! Compiler toolset discovery
//!
//! The toolset advertises itself through a "common tools" directory exported
//! in the environment; the install root sits two levels above it. The
//! toolchain is optional: a machine without it still gets a usable manifest.

use bootstrap_fs::NormalizedPath;
use tracing::debug;

use crate::{EnvSnapshot, FileSystem, Probe};

/// Environment variable holding the common-tools directory.
pub const TOOLCHAIN_TOOLS_ENV: &str = "VS140COMNTOOLS";

/// Default common-tools location when the variable is not exported.
pub const TOOLCHAIN_TOOLS_DEFAULT: &str =
    "C:/Program Files (x86)/Microsoft Visual Studio 14.0/Common7/Tools";

/// A located compiler toolset installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainInstall {
    /// Install root of the toolset.
    pub path: NormalizedPath,
}

/// Locate the compiler toolset, if installed.
pub fn find_toolchain(env: &EnvSnapshot, fs: &dyn FileSystem) -> Probe<ToolchainInstall> {
    let tools_dir = NormalizedPath::new(
        env.get(TOOLCHAIN_TOOLS_ENV)
            .unwrap_or(TOOLCHAIN_TOOLS_DEFAULT),
    );

    if !fs.is_dir(tools_dir.as_ref()) {
        debug!(tools_dir = %tools_dir, "toolchain common-tools directory not present");
        return Probe::NotFound;
    }

    // <root>/Common7/Tools -> <root>
    let root = tools_dir.parent().and_then(|p| p.parent());
    match root {
        Some(path) => Probe::Found(ToolchainInstall { path }),
        None => Probe::NotFound,
    }
}
