//! Wires route loaders into the core preload registry.

use crate::content::{AboutCache, fetch_about_content};
use futures::FutureExt;
use waypost_core::{PreloadRegistry, PreloadTask};

/// Issues fire-and-forget route preloads on the client.
#[derive(Clone, Debug)]
pub struct RoutePreloader {
    registry: PreloadRegistry,
}

impl RoutePreloader {
    /// Registers a loader for every route that has something to warm.
    pub fn for_site(cache: AboutCache) -> Self {
        let registry = PreloadRegistry::new().register("/about", move || {
            let cache = cache.clone();
            async move {
                if let Err(e) = fetch_about_content(&cache).await {
                    tracing::debug!(error = %e, "About preload failed");
                }
            }
            .boxed_local()
        });

        match registry {
            Ok(registry) => Self { registry },
            Err(report) => {
                tracing::warn!(error = ?report, "Route preloading disabled");
                Self {
                    registry: PreloadRegistry::new(),
                }
            }
        }
    }

    /// Hands the preload task for `path` to `spawn` unless it already ran.
    ///
    /// The work is detached; nothing waits on it and failures are dropped.
    pub fn preload_with(&self, path: &str, spawn: impl FnOnce(PreloadTask)) {
        match self.registry.begin(path) {
            Ok(Some(task)) => spawn(task),
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "Skipping route preload"),
        }
    }

    /// The underlying registry, for inspecting which routes were preloaded.
    pub fn registry(&self) -> &PreloadRegistry {
        &self.registry
    }
}
