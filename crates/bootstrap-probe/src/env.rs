//! Process environment snapshot
//!
//! Discovery never reads `std::env` directly; it consumes a snapshot taken
//! once at startup (or fabricated in tests), so results are a pure function
//! of their inputs.

use std::collections::HashMap;
use std::path::PathBuf;

/// An immutable name-to-value view of the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty snapshot, the starting point for fabricated environments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a snapshot with one additional variable set.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The executable search path, split into its entries.
    pub fn search_path(&self) -> Vec<PathBuf> {
        match self.get("PATH") {
            Some(path) => std::env::split_paths(path).collect(),
            None => Vec::new(),
        }
    }
}
