//! The root layout wrapping every page.

use crate::preload::RoutePreloader;
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use waypost_core::{NAV_LINKS, PRELOAD_ROUTES, PreloadTask};

/// Page chrome registered as the root route.
///
/// Renders the navigation bar, a separator, and the outlet for whichever
/// child route matched. Once the layout is interactive it preloads the
/// routes in [`PRELOAD_ROUTES`].
#[component]
pub fn RootLayout() -> impl IntoView {
    // Effects only run in the browser, after the first render.
    if let Some(preloader) = use_context::<RoutePreloader>() {
        Effect::new(move || {
            start_preloads(&preloader, |task| leptos::task::spawn_local(task));
        });
    }

    view! {
        <NavBar/>
        <hr/>
        <main class="content">
            <Outlet/>
        </main>
    }
}

/// Navigation links. The router marks the current page's link with
/// `aria-current="page"`.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {NAV_LINKS
                .iter()
                .copied()
                .enumerate()
                .map(|(i, link)| {
                    view! {
                        {(i > 0).then_some(" ")}
                        <A href=link.target exact=true>
                            {link.label}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Requests every route in [`PRELOAD_ROUTES`], handing new work to `spawn`.
pub fn start_preloads(preloader: &RoutePreloader, mut spawn: impl FnMut(PreloadTask)) {
    for path in PRELOAD_ROUTES {
        preloader.preload_with(path, &mut spawn);
    }
}
