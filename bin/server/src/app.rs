//! Main Leptos application component and routing.

use crate::content::AboutCache;
use crate::layout::RootLayout;
use crate::pages::{AboutPage, HomePage, NotFoundPage};
use crate::preload::RoutePreloader;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

/// The main application component.
///
/// [`RootLayout`] is the single root route; every page renders inside its
/// outlet, including the catch-all for unknown paths.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let about_cache = AboutCache::new();
    provide_context(RoutePreloader::for_site(about_cache.clone()));
    provide_context(about_cache);

    view! {
        <Title text="waypost"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=path!("") view=RootLayout>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("about") view=AboutPage/>
                    <Route path=path!("*any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos::task::Executor;
    use leptos_router::location::RequestUrl;

    /// Server-renders the whole app as if `path` had been requested.
    fn render_at(path: &str) -> String {
        _ = Executor::init_futures_executor();
        let path = path.to_string();
        Owner::new().with(move || {
            let _suppress = leptos::server::SuppressResourceLoad::new();
            provide_context(RequestUrl::new(&path));
            view! { <App/> }.to_html()
        })
    }

    /// Returns the opening tag and label of the anchor pointing at `href`.
    fn anchor<'a>(html: &'a str, href: &str) -> &'a str {
        let needle = format!("href=\"{href}\"");
        html.split("<a ")
            .skip(1)
            .find(|segment| segment.contains(&needle))
            .and_then(|segment| segment.split("</a>").next())
            .unwrap_or_else(|| panic!("no link to {href} in {html}"))
    }

    /// Returns everything inside the layout's outlet.
    fn outlet(html: &str) -> &str {
        html.split("<main class=\"content\">")
            .nth(1)
            .and_then(|rest| rest.split("</main>").next())
            .unwrap_or_else(|| panic!("no outlet in {html}"))
    }

    fn nav(html: &str) -> &str {
        html.split("<nav class=\"nav-bar\">")
            .nth(1)
            .and_then(|rest| rest.split("</nav>").next())
            .unwrap_or_else(|| panic!("no nav bar in {html}"))
    }

    #[test]
    fn home_renders_inside_layout() {
        let html = render_at("/");

        assert_eq!(nav(&html).matches("<a ").count(), 2);
        assert!(anchor(&html, "/").contains("Home"));
        assert!(anchor(&html, "/about").contains("About"));
        assert!(html.contains("<hr"));
        assert!(outlet(&html).contains("Welcome Home!"));
    }

    #[test]
    fn current_page_link_is_marked() {
        let html = render_at("/");
        assert!(anchor(&html, "/").contains("aria-current=\"page\""));
        assert!(!anchor(&html, "/about").contains("aria-current"));

        let html = render_at("/about");
        assert!(anchor(&html, "/about").contains("aria-current=\"page\""));
        assert!(!anchor(&html, "/").contains("aria-current"));
        assert!(outlet(&html).contains("about-page"));
    }

    #[test]
    fn unknown_path_keeps_chrome() {
        let html = render_at("/nope");

        assert_eq!(nav(&html).matches("<a ").count(), 2);
        assert!(html.contains("<hr"));
        assert!(outlet(&html).contains("Page not found."));
        assert!(!nav(&html).contains("aria-current"));
    }

    #[test]
    fn link_marking_agrees_with_route_matching() {
        // Route matching is case-sensitive, so this is the not-found page
        // and no link may claim to be current.
        let html = render_at("/About");

        assert!(outlet(&html).contains("Page not found."));
        assert!(!nav(&html).contains("aria-current"));
    }

    #[test]
    fn server_render_issues_no_preload() {
        _ = Executor::init_futures_executor();
        let preloader = RoutePreloader::for_site(AboutCache::new());

        Owner::new().with({
            let preloader = preloader.clone();
            move || {
                let _suppress = leptos::server::SuppressResourceLoad::new();
                provide_context(RequestUrl::new("/"));
                provide_context(preloader);
                for _ in 0..2 {
                    let html = view! {
                        <Router>
                            <Routes fallback=|| "Page not found.".into_view()>
                                <ParentRoute path=path!("") view=RootLayout>
                                    <Route path=path!("") view=HomePage/>
                                </ParentRoute>
                            </Routes>
                        </Router>
                    }
                    .to_html();
                    assert!(html.contains("Welcome Home!"));
                }
            }
        });

        assert_eq!(preloader.registry().issued_count(), 0);
    }
}
