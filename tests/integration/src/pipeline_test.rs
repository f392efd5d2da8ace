//! End-to-end pipeline test: discovery -> manifest -> generated artifacts
//!
//! Fabricates a whole machine (repo, platform SDK, graphics SDK, toolchain,
//! build tool on PATH) in a tempdir and drives the full flow through the
//! public crate APIs.

use bootstrap_fs::{NormalizedPath, RepoLayout, io};
use bootstrap_manifest::builder::BuildOutcome;
use bootstrap_manifest::{build, store};
use bootstrap_probe::{
    BUILD_TOOL_EXECUTABLE, EnvSnapshot, GRAPHICS_SDK_ENV, NativeFileSystem, PLATFORM_SDK_ENV,
    TOOLCHAIN_TOOLS_ENV,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Machine {
    temp: TempDir,
    repo_root: PathBuf,
}

impl Machine {
    fn fabricate() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        fs::create_dir_all(root.join("repo")).unwrap();
        fs::create_dir_all(root.join("sdk/Include/8.0")).unwrap();
        fs::create_dir_all(root.join("sdk/Include/9.0")).unwrap();
        fs::create_dir_all(root.join("sdk/Include/10.0")).unwrap();
        fs::create_dir_all(root.join("vulkan/1.0.68.0")).unwrap();
        fs::create_dir_all(root.join("vs14/Common7/Tools")).unwrap();
        fs::create_dir_all(root.join("fbuild-bin")).unwrap();
        fs::write(root.join("fbuild-bin").join(BUILD_TOOL_EXECUTABLE), "").unwrap();

        Self {
            temp,
            repo_root: root.join("repo"),
        }
    }

    fn env(&self) -> EnvSnapshot {
        let root = self.temp.path();
        let path_var = std::env::join_paths([root.join("fbuild-bin")])
            .unwrap()
            .into_string()
            .unwrap();
        EnvSnapshot::empty()
            .with_var(PLATFORM_SDK_ENV, root.join("sdk").to_string_lossy())
            .with_var(GRAPHICS_SDK_ENV, root.join("vulkan/1.0.68.0").to_string_lossy())
            .with_var(TOOLCHAIN_TOOLS_ENV, root.join("vs14/Common7/Tools").to_string_lossy())
            .with_var("PATH", path_var)
    }

    fn layout(&self) -> RepoLayout {
        RepoLayout::new(&self.repo_root)
    }
}

#[test]
fn test_full_pipeline_produces_consistent_artifacts() {
    let machine = Machine::fabricate();
    let layout = machine.layout();

    // init
    let outcome = build(&layout, &machine.env(), &NativeFileSystem, false).unwrap();
    assert_eq!(outcome, BuildOutcome::Created);

    // load
    let manifest = store::load(&layout.manifest_path()).unwrap();
    assert_eq!(manifest.platform_sdk.version, "9.0");
    assert_eq!(manifest.graphics_sdk.as_ref().unwrap().version, "1.0.68.0");
    assert!(manifest.toolchain.as_ref().unwrap().path.ends_with("vs14"));
    let tool = &manifest.external_build_tool;
    assert_eq!(Some(&tool.path), tool.system_path.as_ref());

    // generate the build-system include
    let bff = bootstrap_emit::bff::render(&manifest, &manifest.meta.last_init_time);
    io::write_text(&layout.system_bff_path(), &bff).unwrap();
    let written = io::read_text(&layout.system_bff_path()).unwrap();
    assert!(written.contains(".PlatformSDKVersion = '9.0'"));
    assert!(written.contains(".GraphicsDebugLibSuffix = 'd'"));
    assert!(written.contains(".ToolchainPath = "));

    // editor project reflects the same manifest
    let project = bootstrap_emit::editor::render(&manifest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&project).unwrap();
    assert_eq!(value["folders"][0]["path"].as_str(), Some(manifest.repo.path.as_str()));
    assert_eq!(value["folders"].as_array().unwrap().len(), 4);

    // proxy configuration for the editor build system
    let proxy = layout.sublime_proxy_bff_path();
    bootstrap_invoke::ensure_proxy_bff(&proxy, &layout.main_bff_path()).unwrap();
    let proxy_content = io::read_text(&proxy).unwrap();
    assert_eq!(
        proxy_content,
        format!("#include \"{}\"\n", layout.main_bff_path())
    );
}

#[test]
fn test_reinit_without_force_preserves_the_manifest() {
    let machine = Machine::fabricate();
    let layout = machine.layout();

    build(&layout, &machine.env(), &NativeFileSystem, false).unwrap();
    let before = io::read_text(&layout.manifest_path()).unwrap();

    // A second machine state would change the result, but without force
    // nothing may happen.
    let env_without_graphics = {
        let root = machine.temp.path();
        EnvSnapshot::empty().with_var(PLATFORM_SDK_ENV, root.join("sdk").to_string_lossy())
    };
    let outcome = build(&layout, &env_without_graphics, &NativeFileSystem, false).unwrap();
    assert_eq!(outcome, BuildOutcome::AlreadyInitialized);
    assert_eq!(io::read_text(&layout.manifest_path()).unwrap(), before);

    // With force the new environment wins outright.
    build(&layout, &env_without_graphics, &NativeFileSystem, true).unwrap();
    let manifest = store::load(&layout.manifest_path()).unwrap();
    assert_eq!(manifest.graphics_sdk, None);
    assert_eq!(manifest.toolchain, None);
    assert_eq!(
        manifest.external_build_tool.path,
        manifest.external_build_tool.fallback_path
    );
}

#[test]
fn test_manifest_round_trip_is_stable() {
    let machine = Machine::fabricate();
    let layout = machine.layout();

    build(&layout, &machine.env(), &NativeFileSystem, false).unwrap();
    let manifest = store::load(&layout.manifest_path()).unwrap();

    let copy_path = NormalizedPath::new(machine.temp.path().join("copy.json"));
    store::save(&copy_path, &manifest).unwrap();
    let reloaded = store::load(&copy_path).unwrap();
    assert_eq!(reloaded, manifest);

    // Byte-for-byte identical serialization: stable key order.
    assert_eq!(
        io::read_text(&layout.manifest_path()).unwrap(),
        io::read_text(&copy_path).unwrap()
    );
}
