//! Bootstrap CLI
//!
//! The command-line surface of the developer-environment bootstrap: generate
//! the manifest, emit the build-system include and editor project, and wrap
//! the external build tool.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        if e.is_manifest_absent() {
            eprintln!("Run {} first.", "bootstrap init".cyan());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        // Failure just means a subscriber is already installed.
        let _ = tracing::subscriber::set_global_default(subscriber);
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Init { force } => commands::run_init(&cli.repo_root, force),
        Commands::Generate => commands::run_generate(&cli.repo_root),
        Commands::Project => commands::run_project(&cli.repo_root),
        Commands::Build { proxy_bff, args } => {
            let code = commands::run_build(&cli.repo_root, proxy_bff.as_deref(), &args)?;
            std::process::exit(code);
        }
    }
}
