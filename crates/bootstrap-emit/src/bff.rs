//! Build-system include file renderer
//!
//! Renders the `System.bff` fragment the main build configuration includes.
//! Variables for optional dependencies are emitted only when the manifest
//! carries their section, so the build configuration can `#if`-guard on them.

use bootstrap_manifest::Manifest;

/// Render the `System.bff` include file.
///
/// `generated_at` goes into the header comment; passing it in keeps the
/// renderer a pure function of its arguments.
pub fn render(manifest: &Manifest, generated_at: &str) -> String {
    let mut lines = vec![
        format!("// Generated at {generated_at}"),
        String::new(),
        "#once".to_string(),
        String::new(),
        format!(".RepoRoot = '{}'", manifest.repo.path),
        format!(".PlatformSDKPath = '{}'", manifest.platform_sdk.path),
        format!(".PlatformSDKVersion = '{}'", manifest.platform_sdk.version),
    ];

    if let Some(toolchain) = &manifest.toolchain {
        lines.push(format!(".ToolchainPath = '{}'", toolchain.path));
    }

    if let Some(graphics) = &manifest.graphics_sdk {
        lines.push(format!(".GraphicsSDKPath = '{}'", graphics.path));
        lines.push(format!(".GraphicsSDKVersion = '{}'", graphics.version));
        lines.push(format!(
            ".GraphicsDebugLibSuffix = '{}'",
            debug_lib_suffix(&graphics.version)
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Suffix of the graphics SDK debug libraries.
///
/// SDKs up to 1.0.13 shipped debug libraries under the release name; newer
/// ones append `d`.
fn debug_lib_suffix(version: &str) -> &'static str {
    let mut parts = version.split('.').map(|part| part.parse::<u32>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(1)), Some(Ok(0)), Some(Ok(patch))) if patch <= 13 => "",
        _ => "d",
    }
}
