//! Editor project file renderer
//!
//! Renders a Sublime Text project wired to drive builds through the
//! `bootstrap build` wrapper. Folder entries for SDKs appear only for the
//! dependencies the manifest actually carries.

use bootstrap_manifest::Manifest;
use serde_json::{Value, json};

use crate::Result;

/// Build variants offered in the editor, as (display name, build target).
const BUILD_RULES: &[(&str, &str)] = &[
    ("Core", "Core"),
    ("Cfg", "Cfg"),
    ("ShaderCompiler", "ShaderCompiler"),
    ("Application", "Application"),
    ("Tests: Build Only", "Tests"),
    ("Tests: Build and Run", "Tests-Run"),
    ("Generate: Sublime Text Project", "subl"),
    ("Generate: Visual Studio Solution", "vs"),
    ("Rebuild All", "-clean"),
];

/// Matches `<file>(<line>[, <column>])` diagnostics in build output.
const FILE_REGEX: &str = r"([A-z]:.*?)\(([0-9]+)(?:,\s*[0-9]+)?\)";

/// Render the `.sublime-project` file for the given manifest.
pub fn render(manifest: &Manifest) -> Result<String> {
    let base_command = build_command(manifest);

    let variants: Vec<Value> = BUILD_RULES
        .iter()
        .map(|(name, target)| {
            let mut cmd = base_command.clone();
            cmd.push(target.to_string());
            json!({ "cmd": cmd, "name": name })
        })
        .collect();

    let mut folders = vec![json!({ "path": manifest.repo.path })];

    folders.push(json!({
        "path": format!(
            "{}/Include/{}",
            manifest.platform_sdk.path, manifest.platform_sdk.version
        ),
        "name": format!("Platform SDK {}", manifest.platform_sdk.version),
        "file_include_patterns": ["*.h"],
        "folder_exclude_patterns": ["__pycache__"],
    }));

    if let Some(toolchain) = &manifest.toolchain {
        folders.push(json!({
            "path": format!("{}/VC", toolchain.path),
            "name": "Toolchain / VC",
            "file_include_patterns": ["*.h"],
        }));
    }

    if let Some(graphics) = &manifest.graphics_sdk {
        folders.push(json!({
            "path": graphics.path,
            "name": format!("Graphics SDK {}", graphics.version),
            "file_include_patterns": ["*.h", "*.hpp"],
        }));
    }

    let project = json!({
        "build_systems": [{
            "cmd": base_command,
            "working_dir": format!("{}/SublimeText3", manifest.repo.workspace_path),
            "file_regex": FILE_REGEX,
            "name": project_name(manifest),
            "variants": variants,
        }],
        "folders": folders,
    });

    let mut rendered = serde_json::to_string_pretty(&project)?;
    rendered.push('\n');
    Ok(rendered)
}

/// The wrapper invocation every build variant goes through.
///
/// The proxy configuration gives the editor its own build database instead
/// of sharing the command line one.
fn build_command(manifest: &Manifest) -> Vec<String> {
    vec![
        "bootstrap".to_string(),
        "build".to_string(),
        "--proxy-bff".to_string(),
        format!("{}/SublimeText3.bff", manifest.repo.workspace_path),
        "--".to_string(),
        "-ide".to_string(),
    ]
}

fn project_name(manifest: &Manifest) -> String {
    manifest
        .repo
        .path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("Project")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_manifest::schema::{
        ExternalBuildToolSection, GraphicsSdkSection, MetaSection, PlatformSdkSection,
        RepoSection,
    };
    use pretty_assertions::assert_eq;

    fn manifest() -> Manifest {
        Manifest {
            meta: MetaSection {
                last_init_time: "2017-01-15 09:30:00.000000".to_string(),
            },
            repo: RepoSection {
                path: "/checkouts/VulkanExperiments".to_string(),
                build_path: "/checkouts/VulkanExperiments/Build".to_string(),
                workspace_path: "/checkouts/VulkanExperiments/Workspace".to_string(),
            },
            toolchain: None,
            platform_sdk: PlatformSdkSection {
                path: "C:/Windows Kits/10".to_string(),
                version: "10.0.14393.0".to_string(),
            },
            graphics_sdk: Some(GraphicsSdkSection {
                path: "C:/VulkanSDK/1.0.68.0".to_string(),
                version: "1.0.68.0".to_string(),
            }),
            external_build_tool: ExternalBuildToolSection {
                path: "/repo/Utilities/FBuild".to_string(),
                executable_path: "/repo/Utilities/FBuild/FBuild.exe".to_string(),
                system_path: None,
                system_executable_path: None,
                fallback_path: "/repo/Utilities/FBuild".to_string(),
                fallback_executable_path: "/repo/Utilities/FBuild/FBuild.exe".to_string(),
            },
        }
    }

    fn parsed(manifest: &Manifest) -> Value {
        serde_json::from_str(&render(manifest).unwrap()).unwrap()
    }

    #[test]
    fn test_project_name_is_repo_directory_name() {
        let project = parsed(&manifest());
        assert_eq!(
            project["build_systems"][0]["name"],
            json!("VulkanExperiments")
        );
    }

    #[test]
    fn test_build_command_goes_through_proxy_bff() {
        let project = parsed(&manifest());
        let cmd = project["build_systems"][0]["cmd"].as_array().unwrap();
        assert_eq!(cmd[0], json!("bootstrap"));
        assert!(cmd.contains(&json!(
            "/checkouts/VulkanExperiments/Workspace/SublimeText3.bff"
        )));
    }

    #[test]
    fn test_one_variant_per_build_rule() {
        let project = parsed(&manifest());
        let variants = project["build_systems"][0]["variants"].as_array().unwrap();
        assert_eq!(variants.len(), BUILD_RULES.len());
        assert_eq!(variants[0]["name"], json!("Core"));
        assert_eq!(
            variants.last().unwrap()["cmd"].as_array().unwrap().last(),
            Some(&json!("-clean"))
        );
    }

    #[test]
    fn test_missing_toolchain_folder_is_omitted() {
        let project = parsed(&manifest());
        let folders = project["folders"].as_array().unwrap();
        // repo + platform SDK + graphics SDK, no toolchain
        assert_eq!(folders.len(), 3);
        assert!(
            folders
                .iter()
                .all(|f| f["name"] != json!("Toolchain / VC"))
        );
    }

    #[test]
    fn test_platform_sdk_folder_points_at_versioned_include() {
        let project = parsed(&manifest());
        let folders = project["folders"].as_array().unwrap();
        assert_eq!(
            folders[1]["path"],
            json!("C:/Windows Kits/10/Include/10.0.14393.0")
        );
    }
}
