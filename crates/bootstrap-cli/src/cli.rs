//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bootstrap - set up the developer environment for this repository
#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root to operate on
    #[arg(long, global = true, default_value = ".")]
    pub repo_root: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the repo manifest, if it doesn't exist already
    Init {
        /// Regenerate the manifest even when it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Generate the build-system include file from the manifest
    Generate,

    /// Print a Sublime Text project for this repository to stdout
    Project,

    /// Run the external build tool, forwarding its exit code
    Build {
        /// Proxy .bff file, to give this consumer its own build database
        #[arg(long = "proxy-bff")]
        proxy_bff: Option<PathBuf>,

        /// Arguments passed through to the build tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_forwards_hyphenated_args() {
        let cli = Cli::parse_from(["bootstrap", "build", "--", "-ide", "-clean"]);
        match cli.command {
            Commands::Build { args, .. } => {
                assert_eq!(args, vec!["--", "-ide", "-clean"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_init_force_short_flag() {
        let cli = Cli::parse_from(["bootstrap", "init", "-f"]);
        assert_eq!(cli.command, Commands::Init { force: true });
    }

    #[test]
    fn test_repo_root_defaults_to_current_dir() {
        let cli = Cli::parse_from(["bootstrap", "init"]);
        assert_eq!(cli.repo_root, PathBuf::from("."));
    }
}
