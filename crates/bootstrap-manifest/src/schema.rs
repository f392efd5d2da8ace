//! Manifest schema
//!
//! A tree of string leaves only; every path and version is serialized as
//! text. Struct declaration order is the on-disk key order, which keeps the
//! file stable and diffable across regenerations.

use serde::{Deserialize, Serialize};

/// The persisted record of discovered dependency locations and versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "Meta")]
    pub meta: MetaSection,

    #[serde(rename = "Repo")]
    pub repo: RepoSection,

    /// Absent when the compiler toolset is not installed (optional).
    #[serde(rename = "Toolchain", default, skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<ToolchainSection>,

    #[serde(rename = "PlatformSDK")]
    pub platform_sdk: PlatformSdkSection,

    /// Absent when the graphics SDK is not installed (optional).
    #[serde(rename = "GraphicsSDK", default, skip_serializing_if = "Option::is_none")]
    pub graphics_sdk: Option<GraphicsSdkSection>,

    #[serde(rename = "ExternalBuildTool")]
    pub external_build_tool: ExternalBuildToolSection,
}

/// Bookkeeping about the manifest file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetaSection {
    /// Local timestamp of the last (re)generation.
    pub last_init_time: String,
}

/// Locations of the repository and its generated-artifact directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepoSection {
    pub path: String,
    pub build_path: String,
    pub workspace_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToolchainSection {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformSdkSection {
    pub path: String,
    /// Lexicographically greatest version subdirectory of `<Path>/Include`.
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GraphicsSdkSection {
    pub path: String,
    /// Trailing path segment of the resolved SDK root.
    pub version: String,
}

/// The chosen build tool installation plus both candidates.
///
/// `Path` equals `SystemPath` when a system installation exists and is a
/// directory, otherwise `FallbackPath`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalBuildToolSection {
    pub path: String,
    pub executable_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_executable_path: Option<String>,
    pub fallback_path: String,
    pub fallback_executable_path: String,
}
