//! `bootstrap init` - generate the repo manifest

use std::path::Path;

use bootstrap_fs::RepoLayout;
use bootstrap_manifest::builder::BuildOutcome;
use bootstrap_probe::{EnvSnapshot, NativeFileSystem};
use colored::Colorize;

use crate::error::Result;

pub fn run_init(repo_root: &Path, force: bool) -> Result<()> {
    let layout = RepoLayout::new(repo_root);
    let env = EnvSnapshot::from_process();

    match bootstrap_manifest::build(&layout, &env, &NativeFileSystem, force)? {
        BuildOutcome::Created => {
            println!(
                "{} manifest written to {}",
                "ok".green().bold(),
                layout.manifest_path()
            );
        }
        BuildOutcome::AlreadyInitialized => {
            println!(
                "Manifest already exists. Delete it or try some old-fashioned {} if you need to regenerate it.",
                "--force".cyan()
            );
        }
    }
    Ok(())
}
