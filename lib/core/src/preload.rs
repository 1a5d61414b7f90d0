//! One-shot route preloading.
//!
//! A [`PreloadRegistry`] maps route paths to loaders that warm whatever a
//! route needs before the user navigates to it. Each path is handed out at
//! most once for the lifetime of the registry; clones share that record, so
//! a layout that remounts cannot trigger a second preload.

use crate::error::PreloadError;
use crate::route::RoutePath;
use futures::future::LocalBoxFuture;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A detached unit of preload work.
pub type PreloadTask = LocalBoxFuture<'static, ()>;

/// Produces the preload work for a route.
type PreloadLoader = Arc<dyn Fn() -> PreloadTask + Send + Sync>;

/// Registry of route loaders plus the set of routes already preloaded.
#[derive(Clone, Default)]
pub struct PreloadRegistry {
    loaders: HashMap<RoutePath, PreloadLoader>,
    issued: Arc<Mutex<HashSet<RoutePath>>>,
}

impl PreloadRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the loader for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PreloadError::InvalidPath`] if `path` is not a route path and
    /// [`PreloadError::DuplicateLoader`] if the path already has a loader.
    pub fn register<F>(mut self, path: &str, loader: F) -> crate::Result<Self, PreloadError>
    where
        F: Fn() -> PreloadTask + Send + Sync + 'static,
    {
        let route = RoutePath::parse(path).map_err(|e| PreloadError::InvalidPath {
            path: e.path,
            reason: e.reason.to_string(),
        })?;

        if self.loaders.contains_key(&route) {
            return Err(PreloadError::DuplicateLoader {
                path: route.to_string(),
            }
            .into());
        }

        self.loaders.insert(route, Arc::new(loader));
        Ok(self)
    }

    /// Claims the preload for `path`.
    ///
    /// Returns the work to run the first time a path is requested and
    /// `Ok(None)` on every later request. Unknown paths are never recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PreloadError::UnknownRoute`] if no loader is registered.
    pub fn begin(&self, path: &str) -> Result<Option<PreloadTask>, PreloadError> {
        let unknown = || PreloadError::UnknownRoute {
            path: path.to_string(),
        };
        let route = RoutePath::parse(path).map_err(|_| unknown())?;
        let loader = self.loaders.get(&route).ok_or_else(unknown)?;

        let first = self
            .issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(route.clone());

        if first {
            debug!(route = %route, "Starting route preload");
            Ok(Some(loader()))
        } else {
            debug!(route = %route, "Route already preloaded");
            Ok(None)
        }
    }

    /// Whether a preload for `path` has already been handed out.
    #[must_use]
    pub fn is_issued(&self, path: &str) -> bool {
        RoutePath::parse(path).is_ok_and(|route| {
            self.issued
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(&route)
        })
    }

    /// Number of distinct routes preloaded so far.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for PreloadRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<_> = self.loaders.keys().map(RoutePath::as_str).collect();
        routes.sort_unstable();
        f.debug_struct("PreloadRegistry")
            .field("routes", &routes)
            .field("issued", &self.issued_count())
            .finish()
    }
}
