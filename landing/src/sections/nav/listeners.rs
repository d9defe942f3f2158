//! Scoped DOM event listeners.
//!
//! An [`EventListener`] is attached when constructed and detached when
//! dropped, so whoever holds it decides how long the subscription lives.
//! [`use_scoped`] ties such a guard to a reactive condition and to the
//! component's lifetime.

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// Key name reported by `KeyboardEvent.key` for the Tab key.
pub const TAB_KEY: &str = "Tab";
/// Key name reported by `KeyboardEvent.key` for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// An attached event listener; detached on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `handler` for `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!(event, ?err, "failed to attach listener");
                None
            }
        }
    }

    /// Attach to `window`. `None` outside a browser.
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::new(&window, event, handler)
    }

    /// Attach to `document`. `None` outside a browser.
    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        Self::new(&document, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Hold the resource returned by `acquire` while the component is mounted.
///
/// `acquire` runs in an effect: whenever a signal it reads changes, the
/// current resource is dropped first and `acquire` runs again. Returning
/// `None` means "nothing to hold in this state". The last resource is dropped
/// when the owning component is cleaned up.
pub fn use_scoped<G, F>(acquire: F)
where
    G: 'static,
    F: Fn() -> Option<G> + 'static,
{
    let slot = StoredValue::new_local(None::<G>);

    Effect::new(move || {
        // Release before re-acquiring: guards restore shared DOM state on drop.
        slot.update_value(|held| drop(held.take()));
        let next = acquire();
        slot.set_value(next);
    });

    on_cleanup(move || {
        let _ = slot.try_update_value(|held| drop(held.take()));
    });
}

/// The `key` of a keyboard event, if `event` is one.
pub fn key_of(event: &Event) -> Option<(String, bool)> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|key| (key.key(), key.shift_key()))
}
