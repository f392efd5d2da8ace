//! Repository manifest: schema, persistence, and generation
//!
//! The manifest is the single persisted record of where this machine keeps
//! the dependencies a build needs. It is written once by [`builder::build`]
//! and treated as read-only by every consumer.

pub mod builder;
pub mod error;
pub mod schema;
pub mod store;

pub use builder::{BuildOutcome, build};
pub use error::{Error, Result};
pub use schema::Manifest;
