//! Keyboard focus containment for the mobile overlay.
//!
//! While the overlay is open, Tab on its last focusable element wraps to the
//! first and Shift+Tab on the first wraps to the last. Every other Tab press is
//! left to the browser.

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::listeners::{EventListener, TAB_KEY, key_of};

/// Elements that can receive keyboard focus inside the overlay.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Something that can take keyboard focus.
pub trait Focus {
    /// Move focus here.
    fn focus_now(&self);
}

impl Focus for HtmlElement {
    fn focus_now(&self) {
        if let Err(err) = self.focus() {
            warn!(?err, "focus() failed");
        }
    }
}

/// First and last focusable element of a container.
#[derive(Debug, Clone)]
pub struct FocusTrap<E> {
    first: E,
    last: E,
}

impl<E: Focus + PartialEq + Clone> FocusTrap<E> {
    /// Build from the container's focusable elements in document order.
    /// `None` when there are none; the trap is then simply not installed.
    pub fn new(elements: Vec<E>) -> Option<Self> {
        let mut elements = elements.into_iter();
        let first = elements.next()?;
        let last = elements.last().unwrap_or_else(|| first.clone());
        Some(Self { first, last })
    }

    /// Focus the first element.
    pub fn activate(&self) {
        self.first.focus_now();
    }

    /// Handle a key press with `active` currently focused. Returns true when
    /// focus was wrapped and the browser default must be suppressed.
    pub fn handle_key(&self, key: &str, shift: bool, active: Option<&E>) -> bool {
        if key != TAB_KEY {
            return false;
        }
        let (edge, target) = if shift {
            (&self.first, &self.last)
        } else {
            (&self.last, &self.first)
        };
        if active == Some(edge) {
            target.focus_now();
            true
        } else {
            false
        }
    }
}

/// Focusable descendants of `container`, in document order.
pub fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Install the trap on `container`: focus its first element and wrap Tab
/// presses at the edges until the returned listener is dropped.
pub fn attach(container: &Element) -> Option<EventListener> {
    let Some(trap) = FocusTrap::new(focusable_elements(container)) else {
        debug!("overlay has no focusable elements, focus trap skipped");
        return None;
    };
    trap.activate();
    debug!("focus trap installed");

    EventListener::on_document("keydown", move |event| {
        let Some((key, shift)) = key_of(&event) else {
            return;
        };
        let active = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.active_element())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if trap.handle_key(&key, shift, active.as_ref()) {
            event.prevent_default();
        }
    })
}
