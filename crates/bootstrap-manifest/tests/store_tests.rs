use bootstrap_fs::NormalizedPath;
use bootstrap_manifest::schema::{
    ExternalBuildToolSection, Manifest, MetaSection, PlatformSdkSection, RepoSection,
};
use bootstrap_manifest::{Error, store};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn sample_manifest() -> Manifest {
    Manifest {
        meta: MetaSection {
            last_init_time: "2017-01-15 09:30:00.000000".to_string(),
        },
        repo: RepoSection {
            path: "/repo".to_string(),
            build_path: "/repo/Build".to_string(),
            workspace_path: "/repo/Workspace".to_string(),
        },
        toolchain: None,
        platform_sdk: PlatformSdkSection {
            path: "C:/Program Files (x86)/Windows Kits/10".to_string(),
            version: "10.0.14393.0".to_string(),
        },
        graphics_sdk: None,
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

#[test]
fn test_save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("RepoManifest.json"));
    let manifest = sample_manifest();

    store::save(&path, &manifest).unwrap();
    let loaded = store::load(&path).unwrap();

    assert_eq!(loaded, manifest);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("Build").join("RepoManifest.json"));

    store::save(&path, &sample_manifest()).unwrap();

    assert!(store::exists(&path));
}

#[test]
fn test_load_missing_file_is_absent() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("RepoManifest.json"));

    let result = store::load(&path);
    assert!(matches!(result, Err(Error::Absent { .. })));
}

#[test]
fn test_load_garbage_is_malformed_not_absent() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("RepoManifest.json");
    fs::write(&file_path, "not json at all {").unwrap();

    let result = store::load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::Malformed { .. })));
}

#[test]
fn test_load_wrong_schema_is_malformed() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("RepoManifest.json");
    // Valid JSON, but the mandatory sections are missing.
    fs::write(&file_path, r#"{"Meta": {"LastInitTime": "x"}}"#).unwrap();

    let result = store::load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::Malformed { .. })));
}

#[test]
fn test_exists_reflects_file_presence() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("RepoManifest.json"));

    assert!(!store::exists(&path));
    store::save(&path, &sample_manifest()).unwrap();
    assert!(store::exists(&path));
}

#[test]
fn test_saved_file_is_human_diffable_json() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("RepoManifest.json"));

    store::save(&path, &sample_manifest()).unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert!(content.contains("\n  \"Meta\""));
    assert!(content.ends_with('\n'));
}
