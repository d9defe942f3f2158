//! Body scroll lock held while the mobile overlay is open.

use tracing::warn;

/// Something with a CSS `overflow` we can set.
pub trait Overflow {
    /// Set the inline `overflow` style.
    fn set_overflow(&self, value: &str);
}

impl Overflow for web_sys::HtmlElement {
    fn set_overflow(&self, value: &str) {
        if let Err(err) = self.style().set_property("overflow", value) {
            warn!(?err, value, "failed to set body overflow");
        }
    }
}

/// Disables scrolling on `B` until dropped.
pub struct ScrollLock<B: Overflow> {
    body: B,
}

impl<B: Overflow> ScrollLock<B> {
    /// Lock `body` (`overflow: hidden`).
    pub fn acquire(body: B) -> Self {
        body.set_overflow("hidden");
        Self { body }
    }
}

impl<B: Overflow> Drop for ScrollLock<B> {
    fn drop(&mut self) {
        self.body.set_overflow("unset");
    }
}

/// Lock the document body. `None` when there is no body to lock.
pub fn lock_body() -> Option<ScrollLock<web_sys::HtmlElement>> {
    let body = web_sys::window()?.document()?.body();
    if body.is_none() {
        warn!("document has no body, scroll lock skipped");
    }
    body.map(ScrollLock::acquire)
}
