//! Data behind the About page and the cache the preload fills.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything the About page displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub name: String,
    pub tagline: String,
    pub description: Option<String>,
    pub version: String,
}

#[cfg(feature = "ssr")]
impl AboutContent {
    /// Builds the page content from the site configuration.
    pub fn from_site(site: &crate::config::SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            tagline: site.tagline.clone(),
            description: site.description.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client-side copy of [`AboutContent`], filled in by the route preload.
///
/// Shared through context so the About page can render without a round
/// trip once the preload has landed.
#[derive(Clone, Debug, Default)]
pub struct AboutCache(ArcRwSignal<Option<AboutContent>>);

impl AboutCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached content without subscribing to changes.
    pub fn get(&self) -> Option<AboutContent> {
        self.0.get_untracked()
    }

    /// Replaces the cached content.
    pub fn store(&self, content: AboutContent) {
        self.0.set(Some(content));
    }
}

/// Returns the cached About content, fetching and caching it on a miss.
///
/// Both the route preload and the About page go through here, so whichever
/// runs second reuses the first one's result.
pub async fn fetch_about_content(cache: &AboutCache) -> Result<AboutContent, ServerFnError> {
    if let Some(content) = cache.get() {
        return Ok(content);
    }

    let content = get_about_content().await?;
    cache.store(content.clone());
    Ok(content)
}

/// Server function returning the About page content.
#[server]
pub async fn get_about_content() -> Result<AboutContent, ServerFnError> {
    use crate::config::SiteConfig;
    use crate::error::ContentError;
    use axum::Extension;

    let Extension(site): Extension<SiteConfig> = leptos_axum::extract().await.map_err(|e| {
        tracing::error!(error = %e, "Site configuration missing from request");
        ContentError::ConfigUnavailable {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    Ok(AboutContent::from_site(&site))
}
