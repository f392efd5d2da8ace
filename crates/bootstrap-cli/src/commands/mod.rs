//! Command implementations

mod build;
mod generate;
mod init;
mod project;

pub use build::run_build;
pub use generate::run_generate;
pub use init::run_init;
pub use project::run_project;
