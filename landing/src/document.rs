//! The HTML document around the app: `<head>` metadata and stylesheet.
//!
//! Head metadata is declared once, in [`SiteHead`], with `leptos_meta`. In the
//! browser those components patch the live `<head>`, `<html>` and `<body>`
//! of trunk's `index.html`. On the host [`render_page`] renders the
//! [`HtmlDocument`] shell and injects the same tags into it.

use leptos::prelude::*;
use leptos_meta::{Body, Html, Meta, Title};

use crate::config::{SiteConfig, SiteMeta};
use crate::layout::BODY_CLASS;
use crate::styles::LANDING_CSS;
use crate::{App, VERSION};

/// Title, description, OpenGraph and Twitter tags, `lang` and body classes.
///
/// Needs a meta context; [`App`] provides one.
#[component]
pub fn SiteHead(
    /// Metadata to declare
    meta: SiteMeta,
) -> impl IntoView {
    let SiteMeta {
        lang,
        title,
        description,
        open_graph,
        twitter_card,
    } = meta;

    view! {
        <Html attr:lang=lang />
        <Body attr:class=BODY_CLASS />
        <Title text=title.clone() />
        <Meta name="generator" content=format!("certifier-landing {VERSION}") />
        <Meta name="description" content=description />
        <Meta property="og:type" content=open_graph.kind />
        <Meta property="og:title" content=title />
        <Meta property="og:image" content=open_graph.image_url />
        <Meta property="og:image:alt" content=open_graph.image_alt />
        <Meta name="twitter:card" content=twitter_card />
    }
}

/// Static document shell for the prerender: charset, viewport and the inlined
/// stylesheet, app in `<body>`. Everything else in the head comes from
/// [`SiteHead`].
#[component]
pub fn HtmlDocument(
    /// Site configuration handed to [`App`]
    config: SiteConfig,
) -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <App config=config />
            </body>
        </html>
    }
}

/// Render the home page as a complete HTML document, `<!DOCTYPE html>` included.
///
/// ```rust
/// use certifier_landing::{SiteConfig, document::render_page};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    use futures::StreamExt;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::ServerMetaContext;

    let owner = Owner::new();
    let html = owner.with(|| {
        let (meta_context, meta_output) = ServerMetaContext::new();
        provide_context(meta_context);

        let shell = view! { <HtmlDocument config=config.clone() /> }.to_html();
        // Tags registered while rendering go in before `</head>`.
        futures::executor::block_on(async move {
            meta_output
                .inject_meta_context(futures::stream::iter([shell]))
                .await
                .collect::<String>()
                .await
        })
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page and write it to `path`, creating parent directories.
/// Returns the number of bytes written.
#[cfg(feature = "ssr")]
pub fn write_page(
    path: &std::path::Path,
    config: &SiteConfig,
) -> Result<usize, crate::LandingError> {
    use crate::LandingError;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LandingError::io(parent, e))?;
    }
    let html = render_page(config);
    std::fs::write(path, &html).map_err(|e| LandingError::io(path, e))?;
    Ok(html.len())
}
