//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables
//! (`SITE__NAME`, `SITE__TAGLINE`, `SITE__DESCRIPTION`).

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Site identity shown on the About page.
    #[serde(default)]
    pub site: SiteConfig,
}

/// Site identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Display name of the site.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// One-line summary shown under the name.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_site_name() -> String {
    "Waypost".to_string()
}

fn default_tagline() -> String {
    "A tiny routed site".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            description: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
