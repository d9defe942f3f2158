//! Navbar and button behaviour in a real DOM.
//!
//! ```text
//! wasm-pack test --headless --chrome landing -- --no-default-features --features csr
//! ```

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use certifier_landing::sections::Navbar;
use certifier_landing::sections::nav::NavItem;
use certifier_landing::ui::Button;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

// Hash links, so following one does not unload the test page.
const HASH_ITEMS: &[NavItem] = &[
    NavItem::new("Features", "#features"),
    NavItem::new("Pricing", "#pricing"),
];

const OPEN: &str = r#"[aria-label="Open mobile menu"]"#;
const CLOSE: &str = r#"[aria-label="Close mobile menu"]"#;
const OVERLAY_LOGO: &str = r#"#mobile-menu a[aria-label="Certifier logo"]"#;
const OVERLAY_CTA: &str = "#mobile-menu .mobile-menu-footer button";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point appended to `<body>`.
fn container() -> HtmlElement {
    let document = document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

fn query(selector: &str) -> Option<HtmlElement> {
    document()
        .query_selector(selector)
        .unwrap()
        .map(JsCast::unchecked_into)
}

fn active() -> Element {
    document().active_element().expect("something focused")
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn press(key: &str, shift: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap()
}

async fn sleep(ms: u64) {
    let (tx, rx) = futures::channel::oneshot::channel();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        Duration::from_millis(ms),
    );
    let _ = rx.await;
}

/// Mount a navbar and open its overlay.
async fn open_navbar() -> impl Sized {
    let mounted = mount_to(container(), || view! { <Navbar items=HASH_ITEMS /> });
    query(OPEN).expect("menu control").click();
    sleep(20).await;
    mounted
}

async fn assert_closed_and_refocused() {
    sleep(20).await;
    assert!(query("#mobile-menu").is_none());
    assert_eq!(body_overflow(), "unset");

    sleep(150).await;
    let control = query(OPEN).unwrap();
    assert_eq!(active(), Element::from(control));
}

#[wasm_bindgen_test]
async fn opening_locks_scroll_and_focuses_overlay() {
    let _navbar = open_navbar().await;

    assert!(query("#mobile-menu").is_some());
    assert_eq!(body_overflow(), "hidden");
    let control = query(OPEN).unwrap();
    assert_eq!(control.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(active(), Element::from(query(OVERLAY_LOGO).unwrap()));
}

#[wasm_bindgen_test]
async fn escape_closes_overlay() {
    let _navbar = open_navbar().await;

    press("Escape", false);
    assert_closed_and_refocused().await;
}

#[wasm_bindgen_test]
async fn close_control_closes_overlay() {
    let _navbar = open_navbar().await;

    query(CLOSE).unwrap().click();
    assert_closed_and_refocused().await;
}

#[wasm_bindgen_test]
async fn following_a_link_closes_overlay() {
    let _navbar = open_navbar().await;

    query(r##"#mobile-menu a[href="#pricing"]"##).unwrap().click();
    assert_closed_and_refocused().await;
}

#[wasm_bindgen_test]
async fn tab_wraps_inside_overlay() {
    let _navbar = open_navbar().await;
    let logo = Element::from(query(OVERLAY_LOGO).unwrap());
    let cta = query(OVERLAY_CTA).unwrap();

    cta.focus().unwrap();
    assert!(!press("Tab", false), "default not prevented");
    assert_eq!(active(), logo);

    assert!(!press("Tab", true), "default not prevented");
    assert_eq!(active(), Element::from(cta));
}

#[wasm_bindgen_test]
async fn unmount_releases_scroll_lock() {
    let navbar = open_navbar().await;
    assert_eq!(body_overflow(), "hidden");

    drop(navbar);
    sleep(20).await;
    assert_eq!(body_overflow(), "unset");
}

#[wasm_bindgen_test]
fn button_runs_click_handler() {
    let clicks = RwSignal::new(0);
    let _button = mount_to(container(), move || {
        view! {
            <Button class="click-counter" on_click=Callback::new(move |_| clicks.update(|n| *n += 1))>
                "Count"
            </Button>
        }
    });

    let button = query("button.click-counter").unwrap();
    button.click();
    button.click();
    assert_eq!(clicks.get_untracked(), 2);
}
