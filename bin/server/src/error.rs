//! Domain error types for server operations.
//!
//! Details stay in the logs; only the user-safe message crosses the server
//! function boundary.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors while serving page content.
#[derive(Debug)]
pub enum ContentError {
    /// Site configuration was not attached to the request.
    ConfigUnavailable { details: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnavailable { details } => {
                write!(f, "site configuration unavailable: {}", details)
            }
        }
    }
}

impl ContentError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ContentError::ConfigUnavailable { .. } => {
                ServerFnError::new("Site information is unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_hides_details() {
        let err = ContentError::ConfigUnavailable {
            details: "missing extension SiteConfig".to_string(),
        };
        assert!(err.to_string().contains("missing extension"));

        let message = err.into_server_error().to_string();
        assert!(message.contains("Site information is unavailable"));
        assert!(!message.contains("missing extension"));
    }
}
