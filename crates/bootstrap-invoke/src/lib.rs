//! External build tool invocation
//!
//! A thin pass-through wrapper: it resolves the build executable from the
//! manifest, makes sure a proxy configuration file exists, runs the tool as
//! a child process with inherited stdio, and hands the exit code back
//! unchanged. No timeout, no retry.

pub mod error;
pub mod invoker;

pub use error::{Error, Result};
pub use invoker::{ensure_proxy_bff, invoke};
