//! Root layout shared by every page.

use leptos::prelude::*;

use crate::sections::Navbar;

/// Classes for `<body>`: the TT Firs Neue family variable and antialiasing.
pub const BODY_CLASS: &str = "font-tt-firs antialiased";

/// Navbar above the page content.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <Navbar />
        {children()}
    }
}
