//! Navbar state machine.
//!
//! Pure data: the component owns one [`NavState`] in a signal and applies the
//! DOM side effects (scroll lock, focus trap, refocus) when `is_open` flips.

/// Mobile overlay visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Overlay hidden, page scrolls normally
    #[default]
    Closed,
    /// Overlay shown as a modal dialog
    Open,
}

/// What closed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close (X) control
    CloseButton,
    /// Escape key while open
    Escape,
    /// A navigation link inside the overlay
    Link,
}

/// Vertical page position, as far as the navbar cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePosition {
    /// Scroll offset is zero
    #[default]
    AtTop,
    /// Scrolled down by any amount
    Scrolled,
}

impl PagePosition {
    /// Classify a vertical scroll offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            Self::Scrolled
        } else {
            Self::AtTop
        }
    }

    /// True when scrolled past the top.
    pub fn is_scrolled(self) -> bool {
        self == Self::Scrolled
    }
}

/// Labels of the expanded overlay sections, in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections(Vec<String>);

impl ExpandedSections {
    /// Flip one section. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|l| l == label) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(label.to_string());
            true
        }
    }

    /// Whether `label` is expanded.
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Number of expanded sections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when everything is collapsed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All navbar UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    overlay: Overlay,
    expanded: ExpandedSections,
    position: PagePosition,
}

impl NavState {
    /// Show the overlay. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        let changed = self.overlay == Overlay::Closed;
        self.overlay = Overlay::Open;
        changed
    }

    /// Hide the overlay. Returns false if it was already closed, in which case
    /// the caller must not schedule a refocus.
    pub fn close(&mut self) -> bool {
        let changed = self.overlay == Overlay::Open;
        self.overlay = Overlay::Closed;
        changed
    }

    /// Flip an expandable section. Independent of every other section.
    pub fn toggle_section(&mut self, label: &str) -> bool {
        self.expanded.toggle(label)
    }

    /// Record the latest scroll offset. Returns true if the position changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let next = PagePosition::from_offset(offset);
        let changed = next != self.position;
        self.position = next;
        changed
    }

    /// Overlay visibility.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Shorthand for `overlay() == Overlay::Open`.
    pub fn is_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    /// Expanded sections.
    pub fn expanded(&self) -> &ExpandedSections {
        &self.expanded
    }

    /// Page position derived from the last scroll offset.
    pub fn position(&self) -> PagePosition {
        self.position
    }
}

/// Id of the toggle button for an expandable section.
pub fn mobile_button_id(label: &str) -> String {
    format!("mobile-button-{}", slug(label))
}

/// Id of the region revealed by an expandable section.
pub fn mobile_section_id(label: &str) -> String {
    format!("mobile-section-{}", slug(label))
}

/// Lowercase, with each run of whitespace replaced by a single `-`.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_at_top() {
        let state = NavState::default();
        assert_eq!(state.overlay(), Overlay::Closed);
        assert_eq!(state.position(), PagePosition::AtTop);
        assert!(state.expanded().is_empty());
    }

    #[test]
    fn open_then_close() {
        let mut state = NavState::default();
        assert!(state.open());
        assert!(state.is_open());
        assert!(state.close());
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_transitions_are_no_ops() {
        let mut state = NavState::default();
        assert!(!state.close());
        assert!(state.open());
        assert!(!state.open());
        assert!(state.close());
        assert!(!state.close());
    }

    #[test]
    fn double_toggle_restores_section() {
        let mut state = NavState::default();
        assert!(state.toggle_section("Resources"));
        assert!(!state.toggle_section("Resources"));
        assert_eq!(state.expanded(), &ExpandedSections::default());
    }

    #[test]
    fn sections_are_independent() {
        let mut state = NavState::default();
        state.toggle_section("Features");
        state.toggle_section("Resources");
        assert!(state.expanded().contains("Features"));
        assert!(state.expanded().contains("Resources"));
        assert_eq!(state.expanded().len(), 2);

        state.toggle_section("Features");
        assert!(!state.expanded().contains("Features"));
        assert!(state.expanded().contains("Resources"));
    }

    #[test]
    fn closing_keeps_expanded_sections() {
        let mut state = NavState::default();
        state.open();
        state.toggle_section("Resources");
        state.close();
        assert!(state.expanded().contains("Resources"));
    }

    #[test]
    fn scroll_offset_classification() {
        assert_eq!(PagePosition::from_offset(0.0), PagePosition::AtTop);
        assert_eq!(PagePosition::from_offset(0.5), PagePosition::Scrolled);
        assert_eq!(PagePosition::from_offset(1200.0), PagePosition::Scrolled);
    }

    #[test]
    fn scroll_updates_report_changes_only() {
        let mut state = NavState::default();
        assert!(!state.set_scroll_offset(0.0));
        assert!(state.set_scroll_offset(12.0));
        assert!(!state.set_scroll_offset(300.0));
        assert!(state.position().is_scrolled());
        assert!(state.set_scroll_offset(0.0));
        assert!(!state.position().is_scrolled());
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slug("Features"), "features");
        assert_eq!(slug("Request demo"), "request-demo");
        assert_eq!(slug("Log  \t in"), "log-in");
        assert_eq!(mobile_button_id("Request demo"), "mobile-button-request-demo");
        assert_eq!(mobile_section_id("Log in"), "mobile-section-log-in");
    }
}
