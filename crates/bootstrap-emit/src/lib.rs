//! Generated-file renderers
//!
//! Each renderer is a pure formatter over a loaded manifest: data in, text
//! out. Nothing here touches the filesystem or the environment; callers
//! decide where the rendered text goes.

pub mod bff;
pub mod editor;
pub mod error;

pub use error::{Error, Result};
