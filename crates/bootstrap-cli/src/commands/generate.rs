//! `bootstrap generate` - emit the build-system include file

use std::path::Path;

use bootstrap_fs::{RepoLayout, io};
use bootstrap_manifest::store;
use colored::Colorize;

use crate::error::Result;

pub fn run_generate(repo_root: &Path) -> Result<()> {
    let layout = RepoLayout::new(repo_root);
    let manifest = store::load(&layout.manifest_path())?;

    let generated_at = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string();
    let content = bootstrap_emit::bff::render(&manifest, &generated_at);

    let out_path = layout.system_bff_path();
    io::write_text(&out_path, &content)?;

    println!("{} wrote {}", "ok".green().bold(), out_path);
    Ok(())
}
