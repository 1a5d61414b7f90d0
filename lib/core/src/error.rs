//! Error handling foundation for waypost.
//!
//! The `Result` alias wraps rootcause's `Report` so callers can layer their
//! own context on top of the domain errors defined here.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from route preloading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadError {
    /// The path given at registration is not a valid route path.
    InvalidPath { path: String, reason: String },
    /// A loader is already registered for this path.
    DuplicateLoader { path: String },
    /// No loader is registered for the requested path.
    UnknownRoute { path: String },
}

impl fmt::Display for PreloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid preload path '{path}': {reason}")
            }
            Self::DuplicateLoader { path } => {
                write!(f, "a preload loader is already registered for '{path}'")
            }
            Self::UnknownRoute { path } => write!(f, "no preload loader for route '{path}'"),
        }
    }
}

impl std::error::Error for PreloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn preload_error_display() {
        let err = PreloadError::UnknownRoute {
            path: "/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "no preload loader for route '/nowhere'");
    }
}
