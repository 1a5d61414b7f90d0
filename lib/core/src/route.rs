//! Validated route paths used as preload keys.

use std::fmt;

/// Error returned when a string is not a usable route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoutePath {
    /// The rejected input.
    pub path: String,
    /// Why the input was rejected.
    pub reason: &'static str,
}

impl fmt::Display for InvalidRoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route path '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for InvalidRoutePath {}

/// An absolute route path such as `/` or `/about`.
///
/// Paths are stored without a trailing slash (except the root itself), so
/// `/about/` and `/about` are the same route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Parses and normalizes a route path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoutePath`] if the path is not absolute, contains
    /// whitespace, or carries a query string or fragment.
    pub fn parse(path: &str) -> Result<Self, InvalidRoutePath> {
        let reject = |reason| InvalidRoutePath {
            path: path.to_string(),
            reason,
        };

        if !path.starts_with('/') {
            return Err(reject("must start with '/'"));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(reject("must not contain whitespace"));
        }
        if path.contains(['?', '#']) {
            return Err(reject("must not contain a query or fragment"));
        }

        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the normalized path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root() {
        let path = RoutePath::parse("/").expect("root should parse");
        assert_eq!(path.as_str(), "/");
        assert_eq!(RoutePath::parse("//").expect("should parse").as_str(), "/");
    }

    #[test]
    fn parse_trims_trailing_slash() {
        let path = RoutePath::parse("/about/").expect("should parse");
        assert_eq!(path.to_string(), "/about");
        assert_eq!(path, RoutePath::parse("/about").expect("should parse"));
    }

    #[test]
    fn parse_keeps_case() {
        let path = RoutePath::parse("/About").expect("should parse");
        assert_ne!(path, RoutePath::parse("/about").expect("should parse"));
    }

    #[test]
    fn parse_rejects_relative_path() {
        let err = RoutePath::parse("about").unwrap_err();
        assert_eq!(err.path, "about");
        assert_eq!(err.reason, "must start with '/'");
    }

    #[test]
    fn parse_rejects_query_and_whitespace() {
        assert!(RoutePath::parse("/about?tab=1").is_err());
        assert!(RoutePath::parse("/about#team").is_err());
        assert!(RoutePath::parse("/about us").is_err());
    }
}
