//! Fallback page for paths with no matching route.

use leptos::prelude::*;

/// Shown in the layout's outlet when no other page matches.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <p>"Page not found."</p>
            <a href="/">"Return to Home"</a>
        </div>
    }
}
