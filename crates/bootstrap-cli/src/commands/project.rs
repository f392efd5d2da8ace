//! `bootstrap project` - print the Sublime Text project

use std::fs;
use std::path::Path;

use bootstrap_fs::RepoLayout;
use bootstrap_manifest::store;

use crate::error::Result;

/// Prints the project file to stdout; redirect it where the editor expects.
/// Also makes sure the editor's build working directory exists, since the
/// emitted build system points at it.
pub fn run_project(repo_root: &Path) -> Result<()> {
    let layout = RepoLayout::new(repo_root);
    let manifest = store::load(&layout.manifest_path())?;

    let rendered = bootstrap_emit::editor::render(&manifest)?;
    print!("{rendered}");

    fs::create_dir_all(layout.sublime_working_dir().to_native())?;
    Ok(())
}
