//! Full-document rendering and prerender output.

#![cfg(feature = "ssr")]

mod common;

use certifier_landing::document::{render_page, write_page};
use certifier_landing::{LandingError, SiteConfig};
use common::{element, open_tag};
use pretty_assertions::assert_eq;

#[test]
fn page_is_a_complete_document() {
    let html = render_page(&SiteConfig::default());

    assert!(html.starts_with("<!DOCTYPE html>\n<html"));
    assert!(open_tag(&html, "<html").unwrap().contains(r#"lang="en""#));
    assert!(html.contains("<style>"));
    assert!(html.contains("@font-face"));
    assert!(html.contains("</html>"));
}

#[test]
fn head_carries_site_metadata() {
    let meta = SiteConfig::default().meta;
    let html = render_page(&SiteConfig::default());
    let head = element(&html, "head", "<meta").expect("head");

    assert!(head.contains("Certificate Maker Online"));
    let description = open_tag(head, r#"name="description""#).unwrap();
    assert!(description.contains(&meta.description), "{description}");
    let og_image = open_tag(head, r#"property="og:image""#).unwrap();
    assert!(og_image.contains(&meta.open_graph.image_url), "{og_image}");
    let og_type = open_tag(head, r#"property="og:type""#).unwrap();
    assert!(og_type.contains(r#"content="website""#), "{og_type}");
    let card = open_tag(head, r#"name="twitter:card""#).unwrap();
    assert!(card.contains("summary_large_image"), "{card}");
}

#[test]
fn body_wraps_navbar_and_home_page() {
    let html = render_page(&SiteConfig::default());
    let body = open_tag(&html, "<body").unwrap();

    assert!(body.contains("font-tt-firs antialiased"), "{body}");
    let navbar = html.find("Main navigation").expect("navbar");
    let main = html.find("<main").expect("main");
    assert!(navbar < main);
    assert!(html.contains(r#"href="/demo""#));
}

#[test]
fn config_overrides_reach_the_page() {
    let config = SiteConfig::from_json(
        r#"{
            "meta": { "title": "Certifier Staging", "lang": "pl" },
            "hero": { "title": "Credentials for every course", "cta_button_link": "/book" }
        }"#,
    )
    .unwrap();
    let html = render_page(&config);

    assert!(html.contains("Certifier Staging"));
    assert!(open_tag(&html, "<html").unwrap().contains(r#"lang="pl""#));
    assert!(html.contains("Credentials for every course"));
    assert!(html.contains(r#"href="/book""#));
    assert!(!html.contains(r#"href="/demo""#));
}

#[test]
fn write_page_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist").join("nested").join("index.html");

    let bytes = write_page(&out, &SiteConfig::default()).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();

    assert_eq!(bytes, written.len());
    assert!(written.starts_with("<!DOCTYPE html>"));
}

#[test]
fn write_page_reports_io_failures() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is needed.
    let blocker = dir.path().join("dist");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = write_page(&blocker.join("index.html"), &SiteConfig::default()).unwrap_err();
    assert!(matches!(err, LandingError::Io { .. }), "{err}");
}
