//! Polymorphic button primitive.
//!
//! One component covers the three shapes a clickable element takes on the page:
//!
//! - a link, when `href` is supplied
//! - a caller-supplied element, when `as_child` is supplied (the caller gets the
//!   computed class and the button content and decides what to render)
//! - a native `<button type="button">` otherwise
//!
//! `href` wins over `as_child`.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::class_names;

/// Trailing arrow shown by buttons with `with_arrow`.
pub const ARROW_SRC: &str = "/images/arrow-right.svg";

const BASE_CLASS: &str = "btn";
const ARROW_CLASS: &str = "btn-with-arrow";

/// Visual treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled blue, white label
    #[default]
    Primary,
    /// Blue label, no fill
    Secondary,
}

impl ButtonVariant {
    /// CSS class carrying the variant's color/border treatment.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
        }
    }
}

/// Render callback for the "render as child" mode: receives the computed
/// class string and the button content (children plus optional arrow).
pub type AsChild = Box<dyn FnOnce(String, AnyView) -> AnyView + Send>;

/// What a [`Button`] renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    /// `<a href=...>`
    Link(String),
    /// The caller's element, via [`AsChild`]
    Slot,
    /// `<button type="button">`
    Native,
}

impl ButtonTarget {
    /// Pick the target from which optional inputs are present. An empty
    /// `href` counts as absent.
    pub fn select(href: Option<&str>, has_slot: bool) -> Self {
        match href {
            Some(href) if !href.is_empty() => Self::Link(href.to_string()),
            _ if has_slot => Self::Slot,
            _ => Self::Native,
        }
    }
}

/// Full class string for a button: base, variant, arrow group, caller class.
pub fn button_class(variant: ButtonVariant, with_arrow: bool, extra: &str) -> String {
    class_names(&[
        BASE_CLASS,
        variant.class(),
        if with_arrow { ARROW_CLASS } else { "" },
        extra,
    ])
}

/// Clickable element with two variants and an optional trailing arrow.
///
/// ```rust,ignore
/// view! {
///     <Button href="/demo">"Book a demo"</Button>
///     <Button href="/sign-up" variant=ButtonVariant::Secondary with_arrow=true>
///         "Sign up free"
///     </Button>
///     <Button>"Get started"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Visual treatment (default: primary)
    #[prop(optional)]
    variant: ButtonVariant,
    /// Destination; renders the button as a link
    #[prop(optional, into)]
    href: Option<String>,
    /// Append an arrow that slides right on hover
    #[prop(optional)]
    with_arrow: bool,
    /// Extra CSS classes, appended last
    #[prop(optional, into)]
    class: String,
    /// Render through a caller-supplied element instead of `<button>`
    #[prop(optional)]
    as_child: Option<AsChild>,
    /// Click handler for link and native targets
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, with_arrow, &class);
    let content = view! {
        {children()}
        {with_arrow.then(|| view! { <img src=ARROW_SRC alt="Arrow" class="btn-arrow" /> })}
    };
    let click = move |ev: MouseEvent| {
        if let Some(handler) = on_click {
            handler.run(ev);
        }
    };

    match (ButtonTarget::select(href.as_deref(), as_child.is_some()), as_child) {
        (ButtonTarget::Link(href), _) => view! {
            <a href=href class=class on:click=click>
                {content}
            </a>
        }
        .into_any(),
        (ButtonTarget::Slot, Some(render)) => render(class, content.into_any()),
        _ => view! {
            <button type="button" class=class on:click=click>
                {content}
            </button>
        }
        .into_any(),
    }
}
