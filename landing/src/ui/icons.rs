//! Inline SVG icons (Phosphor Icons, regular weight).

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_LIST size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Hamburger menu
pub const ICON_LIST: &str = "M224,128a8,8,0,0,1-8,8H40a8,8,0,0,1,0-16H216A8,8,0,0,1,224,128ZM40,72H216a8,8,0,0,0,0-16H40a8,8,0,0,0,0,16ZM216,184H40a8,8,0,0,0,0,16H216a8,8,0,0,0,0-16Z";

/// Close (X)
pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Caret/chevron down
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";
