//! UI primitives shared by the page sections.

pub mod button;
pub mod icons;

pub use button::{AsChild, Button, ButtonTarget, ButtonVariant};
pub use icons::Icon;

/// Join class names, skipping empty parts.
///
/// ```rust
/// use certifier_landing::ui::class_names;
///
/// assert_eq!(class_names(&["btn", "", " btn-primary "]), "btn btn-primary");
/// ```
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
