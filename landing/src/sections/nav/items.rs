//! Navigation items shown in the navbar, in display order.

/// A navbar entry. Items with `sub_items` render as expandable sections in
/// the mobile overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label, never empty
    pub label: &'static str,
    /// Route the item links to
    pub href: &'static str,
    /// Child entries, in display order
    pub sub_items: &'static [NavItem],
}

impl NavItem {
    /// Leaf item without children.
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            sub_items: &[],
        }
    }

    /// Item with children.
    pub const fn with_sub_items(
        label: &'static str,
        href: &'static str,
        sub_items: &'static [NavItem],
    ) -> Self {
        Self {
            label,
            href,
            sub_items,
        }
    }

    /// Whether the item expands in the mobile overlay.
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// The main navigation.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Features", "/features"),
    NavItem::new("Solutions", "/solutions"),
    NavItem::new("Pricing", "/pricing"),
    NavItem::new("Resources", "/resources"),
    NavItem::new("Request demo", "/request-demo"),
    NavItem::new("Log in", "/log-in"),
];
