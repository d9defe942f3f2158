//! Home page: hero, trust wall, filler.

use leptos::prelude::*;

use crate::config::HeroCopy;
use crate::sections::{Hero, Placeholder, Trust};

/// The landing page body.
#[component]
pub fn HomePage(
    /// Hero copy; defaults to the production text
    #[prop(optional)]
    hero: HeroCopy,
) -> impl IntoView {
    view! {
        <main>
            <Hero
                title=hero.title
                description=hero.description
                cta_button_text=hero.cta_button_text
                cta_button_link=hero.cta_button_link
                sign_up_button_text=hero.sign_up_button_text
                sign_up_button_link=hero.sign_up_button_link
            />
            <Trust />
            <Placeholder />
        </main>
    }
}
