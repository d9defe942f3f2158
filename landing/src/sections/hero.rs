//! Hero section: headline, pitch, calls to action.

use leptos::prelude::*;

use crate::ui::{Button, ButtonVariant, class_names};

/// Default headline.
pub const DEFAULT_TITLE: &str = "Power your training program with digital credentials";
/// Default paragraph under the headline.
pub const DEFAULT_DESCRIPTION: &str = "Boost your training business, stay top of mind with program alumni, and turn learning progress into shareable, professional, and branded certificates.";
/// Default primary call-to-action label.
pub const DEFAULT_CTA_BUTTON_TEXT: &str = "Book a demo";
/// Default primary call-to-action destination.
pub const DEFAULT_CTA_BUTTON_LINK: &str = "/demo";
/// Default sign-up label.
pub const DEFAULT_SIGN_UP_BUTTON_TEXT: &str = "Sign up free";
/// Default sign-up destination.
pub const DEFAULT_SIGN_UP_BUTTON_LINK: &str = "/sign-up";

/// Decorative illustration on the right of the hero.
pub const HERO_IMAGE_SRC: &str = "/images/hero-img.svg";

/// Headline, pitch and the two calls to action.
#[component]
pub fn Hero(
    /// Headline
    #[prop(into, default = DEFAULT_TITLE.into())]
    title: String,
    /// Paragraph under the headline
    #[prop(into, default = DEFAULT_DESCRIPTION.into())]
    description: String,
    /// Primary call-to-action label
    #[prop(into, default = DEFAULT_CTA_BUTTON_TEXT.into())]
    cta_button_text: String,
    /// Primary call-to-action destination
    #[prop(into, default = DEFAULT_CTA_BUTTON_LINK.into())]
    cta_button_link: String,
    /// Sign-up label
    #[prop(into, default = DEFAULT_SIGN_UP_BUTTON_TEXT.into())]
    sign_up_button_text: String,
    /// Sign-up destination
    #[prop(into, default = DEFAULT_SIGN_UP_BUTTON_LINK.into())]
    sign_up_button_link: String,
    /// Extra classes for the `<section>`
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <section class=class_names(&["hero", class.as_str()])>
            <div class="hero-inner">
                <div id="content" class="hero-content">
                    <div class="hero-copy">
                        <G2Tag />
                        <h1 class="hero-title">{title}</h1>
                        <p class="hero-description">{description}</p>
                        <div class="hero-actions">
                            <Button href=cta_button_link class="hero-cta">
                                {cta_button_text}
                            </Button>
                            <Button
                                href=sign_up_button_link
                                variant=ButtonVariant::Secondary
                                with_arrow=true
                            >
                                {sign_up_button_text}
                            </Button>
                        </div>
                    </div>
                </div>
                <div id="animation" class="hero-visual">
                    <img src=HERO_IMAGE_SRC alt="Hero image" />
                </div>
            </div>
        </section>
    }
}

/// G2 rating pill above the headline.
#[component]
fn G2Tag() -> impl IntoView {
    view! {
        <div class="g2-tag">
            <img src="/images/g2-badge.svg" alt="G2" width="20" height="20" />
            <span class="g2-stars" aria-hidden="true">"★★★★★"</span>
            <span class="g2-score">"4.9/5 on G2"</span>
        </div>
    }
}
