//! # certifier-landing
//!
//! The Certifier marketing landing page, built from Leptos 0.8 components.
//!
//! The same component tree runs in two places:
//!
//! - **Browser (`csr` feature)** - the `certifier-landing` binary mounts [`App`]
//!   into `<body>`; trunk builds it with `--no-default-features --features csr`.
//! - **Host (`ssr` feature, default)** - [`document::render_page`] renders the
//!   full HTML document to a string, used by the `prerender` binary and by the
//!   integration tests.
//!
//! ## Architecture
//!
//! - [`ui`] - primitives shared across sections (button, icons, class helper)
//! - [`sections`] - navbar, hero, trust wall, placeholder
//! - [`pages`] - page compositions
//! - [`layout`] - root layout wrapping every page with the navbar
//! - [`document`] - head metadata (`leptos_meta`) and the prerender shell
//! - [`config`] - site metadata and hero copy, with defaults and JSON loading
//!
//! ---
//!
//! Developed by The Certifier Team (c)2025

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod ui;

pub use config::{HeroCopy, SiteConfig, SiteMeta};
pub use error::LandingError;

use document::SiteHead;
use layout::RootLayout;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use pages::HomePage;

/// Crate version, used for the generator meta tag and CLI banners.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application root: head metadata, then the home page inside the root
/// layout.
#[component]
pub fn App(
    /// Site configuration; defaults reproduce the production copy
    #[prop(optional)]
    config: SiteConfig,
) -> impl IntoView {
    provide_meta_context();

    view! {
        <SiteHead meta=config.meta />
        <RootLayout>
            <HomePage hero=config.hero />
        </RootLayout>
    }
}
