//! Core domain types for the waypost site.
//!
//! This crate holds everything about the root layout that does not need a
//! renderer: the navigation link table, validated route paths, and the
//! registry that makes sure each route is preloaded at most once.

pub mod error;
pub mod nav;
pub mod preload;
pub mod route;

pub use error::{PreloadError, Result};
pub use nav::{NAV_LINKS, NavLink, PRELOAD_ROUTES};
pub use preload::{PreloadRegistry, PreloadTask};
pub use route::{InvalidRoutePath, RoutePath};
