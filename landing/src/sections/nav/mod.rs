//! Fixed navbar with a mobile overlay menu.
//!
//! Wide viewports get inline links and a "Get started" button. Narrow
//! viewports get a menu control that opens a modal overlay; while it is open
//! the body does not scroll, focus is trapped inside it, and Escape closes it.
//! When it closes, focus returns to the menu control after the exit
//! transition.

mod focus_trap;
mod items;
mod listeners;
mod scroll_lock;
mod state;

pub use focus_trap::{FOCUSABLE_SELECTOR, Focus, FocusTrap};
pub use items::{NAV_ITEMS, NavItem};
pub use listeners::{ESCAPE_KEY, EventListener, TAB_KEY, use_scoped};
pub use scroll_lock::{Overflow, ScrollLock};
pub use state::{
    CloseTrigger, ExpandedSections, NavState, Overlay, PagePosition, mobile_button_id,
    mobile_section_id, slug,
};

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use tracing::debug;

use crate::ui::icons::{ICON_CARET_DOWN, ICON_LIST, ICON_X};
use crate::ui::{Button, Icon, class_names};
use listeners::key_of;
use scroll_lock::lock_body;

/// `id` of the overlay dialog.
pub const MOBILE_MENU_ID: &str = "mobile-menu";
/// `id` of the heading that labels the overlay.
pub const MOBILE_MENU_TITLE_ID: &str = "mobile-menu-title";
/// Logo shown in the header and overlay.
pub const LOGO_SRC: &str = "/images/logo.svg";

/// Wait for the overlay exit transition before refocusing the menu control.
const REFOCUS_DELAY: Duration = Duration::from_millis(100);

/// Site header.
#[component]
pub fn Navbar(
    /// Extra classes for the fixed wrapper
    #[prop(optional, into)]
    class: String,
    /// Entries to show, in order
    #[prop(default = NAV_ITEMS)]
    items: &'static [NavItem],
) -> impl IntoView {
    let state = RwSignal::new(NavState::default());
    let is_open = Memo::new(move |_| state.with(NavState::is_open));
    let is_scrolled = Memo::new(move |_| state.with(|s| s.position().is_scrolled()));

    let menu_button = NodeRef::<html::Button>::new();
    let overlay = NodeRef::<html::Div>::new();

    let open_menu = move |_| {
        if state.try_update(NavState::open).unwrap_or(false) {
            debug!("mobile menu opened");
        }
    };

    let close_menu = Callback::new(move |trigger: CloseTrigger| {
        if !state.try_update(NavState::close).unwrap_or(false) {
            return;
        }
        debug!(?trigger, "mobile menu closed");
        set_timeout(
            move || {
                if let Some(button) = menu_button.get_untracked() {
                    button.focus_now();
                }
            },
            REFOCUS_DELAY,
        );
    });

    // Page position: once at mount, then on every scroll event.
    use_scoped(move || {
        let window = web_sys::window()?;
        let sync = move |window: &web_sys::Window| {
            let offset = window.scroll_y().unwrap_or(0.0);
            let next = PagePosition::from_offset(offset);
            if state.with_untracked(|s| s.position() != next) {
                state.update(|s| {
                    s.set_scroll_offset(offset);
                });
            }
        };
        sync(&window);
        EventListener::on_window("scroll", move |_| sync(&window))
    });

    // Overlay open: body scroll lock, focus trap, Escape to close.
    use_scoped(move || is_open.get().then(lock_body).flatten());
    use_scoped(move || {
        if !is_open.get() {
            return None;
        }
        let container = overlay.get()?;
        focus_trap::attach(&container)
    });
    use_scoped(move || {
        if !is_open.get() {
            return None;
        }
        EventListener::on_document("keydown", move |event| {
            if key_of(&event).is_some_and(|(key, _)| key == ESCAPE_KEY) {
                close_menu.run(CloseTrigger::Escape);
            }
        })
    });

    view! {
        <div class=move || {
            class_names(&[
                "navbar",
                if is_scrolled.get() { "navbar-scrolled" } else { "" },
                class.as_str(),
            ])
        }>
            <div class="navbar-inner">
                <header class="navbar-header">
                    <a aria-label="Certifier logo" href="/" class="navbar-logo">
                        <img src=LOGO_SRC alt="Certifier logo" width="145" height="34" />
                    </a>

                    <div class="navbar-desktop">
                        <nav class="navbar-links" role="navigation" aria-label="Main navigation">
                            {items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a href=item.href class="navbar-link focus-ring">
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </nav>
                        <Button class="navbar-cta focus-ring">"Get started"</Button>
                    </div>

                    <div class="navbar-mobile-controls">
                        <button
                            node_ref=menu_button
                            on:click=open_menu
                            class="navbar-icon-button focus-ring"
                            aria-label="Open mobile menu"
                            aria-expanded=move || if is_open.get() { "true" } else { "false" }
                            aria-controls=MOBILE_MENU_ID
                            aria-haspopup="dialog"
                        >
                            <Icon path=ICON_LIST />
                        </button>
                    </div>
                </header>
            </div>
        </div>

        <Show when=move || is_open.get()>
            <MobileMenu
                items=items
                state=state
                container=overlay
                scrolled=is_scrolled
                on_close=close_menu
            />
        </Show>
    }
}

/// The overlay dialog shown on narrow viewports.
#[component]
fn MobileMenu(
    items: &'static [NavItem],
    state: RwSignal<NavState>,
    container: NodeRef<html::Div>,
    scrolled: Memo<bool>,
    on_close: Callback<CloseTrigger>,
) -> impl IntoView {
    view! {
        <div
            node_ref=container
            class="mobile-menu"
            role="dialog"
            aria-modal="true"
            aria-labelledby=MOBILE_MENU_TITLE_ID
            id=MOBILE_MENU_ID
        >
            <div class="mobile-menu-body">
                <div class=move || {
                    if scrolled.get() {
                        "mobile-menu-header navbar-scrolled"
                    } else {
                        "mobile-menu-header"
                    }
                }>
                    <a
                        aria-label="Certifier logo"
                        href="/"
                        on:click=move |_| on_close.run(CloseTrigger::Link)
                        class="focus-ring"
                    >
                        <img src=LOGO_SRC alt="Certifier logo" width="120" height="40" />
                    </a>
                    <button
                        on:click=move |_| on_close.run(CloseTrigger::CloseButton)
                        class="navbar-icon-button focus-ring"
                        aria-label="Close mobile menu"
                    >
                        <Icon path=ICON_X />
                    </button>
                </div>

                <div class="mobile-menu-scroll">
                    <nav class="mobile-menu-nav" role="navigation" aria-label="Mobile navigation">
                        <div class="sr-only">
                            <h2 id=MOBILE_MENU_TITLE_ID>"Navigation Menu"</h2>
                        </div>
                        {items
                            .iter()
                            .copied()
                            .map(|item| {
                                let expanded = Signal::derive(move || {
                                    state.with(|s| s.expanded().contains(item.label))
                                });
                                let on_toggle = Callback::new(move |_: ()| {
                                    state.update(|s| {
                                        s.toggle_section(item.label);
                                    });
                                });
                                view! {
                                    <MobileNavEntry
                                        item=item
                                        expanded=expanded
                                        on_toggle=on_toggle
                                        on_navigate=on_close
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                </div>

                <div class="mobile-menu-footer">
                    <Button class="navbar-cta focus-ring">"Get started"</Button>
                </div>
            </div>
        </div>
    }
}

/// One overlay entry: a plain link, or for items with children a toggle
/// plus a collapsible region.
///
/// The region offers a single "View all" link to the item's own route;
/// children are not listed individually.
#[component]
pub fn MobileNavEntry(
    /// Entry to render
    item: NavItem,
    /// Whether the section is expanded (ignored for leaf items)
    #[prop(into)]
    expanded: Signal<bool>,
    /// Flip the section
    on_toggle: Callback<()>,
    /// Called when a link inside the entry is activated
    on_navigate: Callback<CloseTrigger>,
) -> impl IntoView {
    let navigate = move |_| on_navigate.run(CloseTrigger::Link);

    let body = if item.has_sub_items() {
        let button_id = mobile_button_id(item.label);
        let section_id = mobile_section_id(item.label);
        let controls = section_id.clone();
        let labelled_by = button_id.clone();
        let view_all = format!("View all {}", item.label.to_lowercase());

        view! {
            <div>
                <button
                    id=button_id
                    on:click=move |_| on_toggle.run(())
                    class="mobile-nav-toggle focus-ring"
                    aria-expanded=move || if expanded.get() { "true" } else { "false" }
                    aria-controls=controls
                >
                    <span class="mobile-nav-label">{item.label}</span>
                    <span
                        class=move || if expanded.get() { "chevron chevron-open" } else { "chevron" }
                        aria-hidden="true"
                    >
                        <Icon path=ICON_CARET_DOWN size="20" />
                    </span>
                </button>
                <Show when=move || expanded.get()>
                    <div
                        id=section_id.clone()
                        class="mobile-nav-section"
                        role="region"
                        aria-labelledby=labelled_by.clone()
                    >
                        <a href=item.href on:click=navigate class="mobile-nav-sublink focus-ring">
                            {view_all.clone()}
                        </a>
                    </div>
                </Show>
            </div>
        }
        .into_any()
    } else {
        view! {
            <a href=item.href on:click=navigate class="mobile-nav-link focus-ring">
                {item.label}
            </a>
        }
        .into_any()
    };

    view! { <div class="mobile-nav-entry">{body}</div> }
}
