//! The navigation links shown in the root layout.
//!
//! Which link is current is decided by the router, not here.

/// A link in the persistent page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Route the link navigates to.
    pub target: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// Links rendered by the root layout, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        target: "/",
        label: "Home",
    },
    NavLink {
        target: "/about",
        label: "About",
    },
];

/// Routes preloaded once the layout is interactive.
pub const PRELOAD_ROUTES: [&str; 1] = ["/about"];
