//! Proxy configuration handling and the child-process launch

use std::process::Command;

use bootstrap_fs::{NormalizedPath, io};
use bootstrap_manifest::Manifest;
use tracing::{debug, info};

use crate::{Error, Result};

/// Make sure the proxy configuration file exists.
///
/// A proxy is a one-line indirection (`#include "<main>"`) that gives each
/// consumer its own build database without editing the main configuration.
/// An existing proxy is left alone; its content may have been customized.
pub fn ensure_proxy_bff(proxy: &NormalizedPath, main_bff: &NormalizedPath) -> Result<()> {
    if proxy.is_file() {
        return Ok(());
    }

    io::write_text(proxy, &format!("#include \"{main_bff}\"\n"))?;
    debug!(proxy = %proxy, main = %main_bff, "created proxy configuration");
    Ok(())
}

/// Run the external build tool against `config`, forwarding `extra_args`.
///
/// Stdio is inherited so build output streams straight through. Returns the
/// child's exit code; a child killed without one maps to -1.
pub fn invoke(manifest: &Manifest, config: &NormalizedPath, extra_args: &[String]) -> Result<i32> {
    let executable = &manifest.external_build_tool.executable_path;

    let mut command = Command::new(executable);
    command.arg("-config").arg(config.to_native()).args(extra_args);

    info!(executable = %executable, config = %config, "launching build tool");
    let status = command.status().map_err(|source| Error::Spawn {
        command: command_line(executable, config, extra_args),
        source,
    })?;

    Ok(status.code().unwrap_or(-1))
}

fn command_line(executable: &str, config: &NormalizedPath, extra_args: &[String]) -> String {
    let mut parts = vec![executable.to_string(), "-config".to_string(), config.to_string()];
    parts.extend(extra_args.iter().cloned());
    parts.join(" ")
}
