// Certifier Landing Page - Leptos 0.8 Edition
// Developed by The Certifier Team (c)2025

use certifier_landing::{App, SiteConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!(version = certifier_landing::VERSION, "mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App config=SiteConfig::default() /> });
}
