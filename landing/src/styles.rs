//! Stylesheet for the landing page.
//!
//! `style.css` at the crate root is the single source: trunk links it into the
//! CSR bundle, and the prerendered document inlines [`LANDING_CSS`].

/// Complete CSS for the page, including the `@font-face` rules for
/// TT Firs Neue (400 and 500).
pub const LANDING_CSS: &str = include_str!("../style.css");

/// Fonts declared in [`LANDING_CSS`], as `(path, weight)`.
pub const FONT_FILES: &[(&str, u16)] = &[
    ("/fonts/tt_firs/TTFirsNeue-Regular.ttf", 400),
    ("/fonts/tt_firs/TTFirsNeue-Medium.ttf", 500),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_font_file_is_declared() {
        for (path, weight) in FONT_FILES {
            assert!(LANDING_CSS.contains(path), "missing @font-face for {path}");
            assert!(LANDING_CSS.contains(&format!("font-weight: {weight}")));
        }
    }

    #[test]
    fn css_is_safe_to_inline() {
        // Inlined into <style>; must not close the element early.
        assert!(!LANDING_CSS.contains("</"));
    }
}
