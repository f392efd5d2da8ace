//! Tagged discovery outcome
//!
//! A missing optional dependency is a normal result, not an error, so
//! discovery functions return [`Probe`] instead of `Option` to make the
//! "not installed" case explicit at every call site.

/// Outcome of probing for one external dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<T> {
    /// The dependency was located.
    Found(T),
    /// The dependency is not installed on this machine.
    NotFound,
}

impl<T> Probe<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Probe::Found(_))
    }

    /// Convert to an `Option`, discarding the not-found marker.
    pub fn found(self) -> Option<T> {
        match self {
            Probe::Found(value) => Some(value),
            Probe::NotFound => None,
        }
    }

    pub fn as_ref(&self) -> Probe<&T> {
        match self {
            Probe::Found(value) => Probe::Found(value),
            Probe::NotFound => Probe::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Probe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Probe::Found(value),
            None => Probe::NotFound,
        }
    }
}
