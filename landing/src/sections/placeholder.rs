//! Filler section below the trust wall.

use leptos::prelude::*;

/// Tall filler block under the fold, so the navbar's scrolled state shows.
#[component]
pub fn Placeholder() -> impl IntoView {
    view! {
        <section class="placeholder-section">"Placeholder added for looking at navbar"</section>
    }
}
