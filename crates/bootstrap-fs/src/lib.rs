//! Filesystem primitives for the bootstrap toolkit
//!
//! Provides forward-slash-normalized paths, atomic file writes, and the
//! fixed on-disk layout of a bootstrapped repository.

pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use error::{Error, Result};
pub use layout::RepoLayout;
pub use path::NormalizedPath;
