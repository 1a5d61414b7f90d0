//! About page component.

use crate::content::{AboutCache, AboutContent, fetch_about_content};
use leptos::prelude::*;
use leptos_meta::Title;

/// The about page component.
///
/// Reads through the [`AboutCache`], so content the layout already
/// preloaded renders without another request.
#[component]
pub fn AboutPage() -> impl IntoView {
    let cache = use_context::<AboutCache>().unwrap_or_default();
    let content = Resource::new(|| (), {
        let cache = cache.clone();
        move |_| {
            let cache = cache.clone();
            async move { fetch_about_content(&cache).await }
        }
    });

    // A server-rendered visit hydrates the resource without fetching;
    // keep the cache in step so the preload finds it warm.
    Effect::new(move || {
        if let Some(Ok(loaded)) = content.get() {
            cache.store(loaded);
        }
    });

    view! {
        <Title text="About"/>
        <div class="about-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    content.get().map(|result| {
                        match result {
                            Ok(content) => view! { <AboutDetails content=content/> }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Failed to load page. Please try again."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AboutDetails(content: AboutContent) -> impl IntoView {
    view! {
        <h3>"Hello from About!"</h3>
        <p class="tagline">{content.name} ": " {content.tagline}</p>
        {content.description.map(|text| view! { <p class="description">{text}</p> })}
        <p class="version">"Version " {content.version}</p>
    }
}
