//! Manifest generation
//!
//! Runs every discovery probe, assembles one manifest record, and persists
//! it. The platform SDK is the one mandatory dependency: without it no
//! manifest is written at all. Regeneration is whole-file; stale fields from
//! a previous run never survive.

use bootstrap_fs::RepoLayout;
use bootstrap_probe::{
    EnvSnapshot, FileSystem, find_build_tool, find_graphics_sdk, find_platform_sdk,
    find_toolchain,
};
use tracing::{debug, info};

use crate::schema::{
    ExternalBuildToolSection, GraphicsSdkSection, Manifest, MetaSection, PlatformSdkSection,
    RepoSection, ToolchainSection,
};
use crate::{Error, Result, store};

/// Format of `Meta.LastInitTime`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// What a call to [`build`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A fresh manifest was written.
    Created,
    /// A manifest already exists and `force` was not given; nothing was done.
    AlreadyInitialized,
}

/// Generate the manifest for the repository described by `layout`.
///
/// With `force` unset an existing manifest is left untouched and the call is
/// a no-op. With `force` set the manifest is rebuilt from the current
/// environment only.
pub fn build(
    layout: &RepoLayout,
    env: &EnvSnapshot,
    fs: &dyn FileSystem,
    force: bool,
) -> Result<BuildOutcome> {
    let manifest_path = layout.manifest_path();

    if !force && store::exists(&manifest_path) {
        debug!(path = %manifest_path, "manifest already exists, skipping");
        return Ok(BuildOutcome::AlreadyInitialized);
    }

    let manifest = assemble(layout, env, fs)?;
    store::save(&manifest_path, &manifest)?;
    info!(path = %manifest_path, "manifest generated");
    Ok(BuildOutcome::Created)
}

/// Probe every dependency and assemble a manifest, without persisting it.
///
/// Fails with [`Error::MissingDependency`] when the platform SDK cannot be
/// found; optional dependencies that are absent simply leave their section
/// out.
pub fn assemble(layout: &RepoLayout, env: &EnvSnapshot, fs: &dyn FileSystem) -> Result<Manifest> {
    let platform_sdk = find_platform_sdk(env, fs)?
        .found()
        .ok_or(Error::MissingDependency {
            name: "PlatformSDK",
        })?;

    let toolchain = find_toolchain(env, fs).found();
    let graphics_sdk = find_graphics_sdk(env, fs).found();
    let build_tool = find_build_tool(env, fs, &layout.build_tool_fallback_dir());

    Ok(Manifest {
        meta: MetaSection {
            last_init_time: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        },
        repo: RepoSection {
            path: layout.root().as_str().to_string(),
            build_path: layout.build_dir().as_str().to_string(),
            workspace_path: layout.workspace_dir().as_str().to_string(),
        },
        toolchain: toolchain.map(|install| ToolchainSection {
            path: install.path.as_str().to_string(),
        }),
        platform_sdk: PlatformSdkSection {
            path: platform_sdk.path.as_str().to_string(),
            version: platform_sdk.version,
        },
        graphics_sdk: graphics_sdk.map(|install| GraphicsSdkSection {
            path: install.path.as_str().to_string(),
            version: install.version,
        }),
        external_build_tool: ExternalBuildToolSection {
            path: build_tool.path.as_str().to_string(),
            executable_path: build_tool.executable_path.as_str().to_string(),
            system_path: build_tool.system_path.map(|p| p.as_str().to_string()),
            system_executable_path: build_tool
                .system_executable_path
                .map(|p| p.as_str().to_string()),
            fallback_path: build_tool.fallback_path.as_str().to_string(),
            fallback_executable_path: build_tool.fallback_executable_path.as_str().to_string(),
        },
    })
}
