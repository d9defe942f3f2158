//! Trust section: tagline and partner logo wall.

use leptos::prelude::*;

use crate::ui::class_names;

/// Fallback for logos without an image.
pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";
/// Vertical divider between the tagline and the logos.
pub const DIVIDER_SRC: &str = "/images/divider.svg";

/// A partner shown on the logo wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustLogo {
    /// Company name, used as alt text
    pub company: &'static str,
    /// Logo image, if we have one
    pub image: Option<&'static str>,
}

impl TrustLogo {
    /// Image to render, falling back to the placeholder.
    pub fn src(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_SRC)
    }
}

/// Partners on the logo wall, in display order.
pub const TRUST_LOGOS: &[TrustLogo] = &[
    TrustLogo {
        company: "Northwind Academy",
        image: Some("/images/trust/northwind.svg"),
    },
    TrustLogo {
        company: "Brightpath Learning",
        image: Some("/images/trust/brightpath.svg"),
    },
    TrustLogo {
        company: "Lumen Institute",
        image: Some("/images/trust/lumen.svg"),
    },
    TrustLogo {
        company: "Summit Skills",
        image: Some("/images/trust/summit.svg"),
    },
    TrustLogo {
        company: "Keystone Courses",
        image: Some("/images/trust/keystone.svg"),
    },
    TrustLogo {
        company: "Atlas Training",
        image: Some("/images/trust/atlas.svg"),
    },
];

/// "500+ training providers" tagline and the partner logo wall.
#[component]
pub fn Trust(
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Logos to show
    #[prop(default = TRUST_LOGOS)]
    logos: &'static [TrustLogo],
) -> impl IntoView {
    view! {
        <div class=class_names(&["trust", class.as_str()])>
            <div class="trust-inner">
                <div class="trust-tagline">
                    "500+ training providers grow their businesses with Certifier"
                </div>
                <img src=DIVIDER_SRC alt="Divider" class="trust-divider" />
                <div class="trust-logos">
                    {logos
                        .iter()
                        .map(|logo| {
                            view! {
                                <div class="trust-logo">
                                    <img src=logo.src() alt=logo.company width="140" height="50" />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
