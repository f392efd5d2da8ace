//! `bootstrap build` - pass-through wrapper around the external build tool

use std::path::Path;

use bootstrap_fs::{NormalizedPath, RepoLayout};
use bootstrap_invoke::{ensure_proxy_bff, invoke};
use bootstrap_manifest::store;

use crate::error::Result;

/// Run the build tool and return its exit code.
pub fn run_build(repo_root: &Path, proxy_bff: Option<&Path>, args: &[String]) -> Result<i32> {
    let layout = RepoLayout::new(repo_root);
    let manifest = store::load(&layout.manifest_path())?;

    let main_bff = layout.main_bff_path();
    let config = match proxy_bff {
        Some(path) => {
            let proxy = NormalizedPath::new(path);
            ensure_proxy_bff(&proxy, &main_bff)?;
            proxy
        }
        None => main_bff,
    };

    // A bare `--` is only a separator for our own argument parser.
    let forwarded: Vec<String> = args.iter().filter(|arg| *arg != "--").cloned().collect();

    Ok(invoke(&manifest, &config, &forwarded)?)
}
