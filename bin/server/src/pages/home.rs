//! Home page component.

use leptos::prelude::*;
use leptos_meta::Title;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <div class="home-page">
            <h3>"Welcome Home!"</h3>
        </div>
    }
}
