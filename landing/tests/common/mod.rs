//! Helpers for picking elements out of rendered HTML.

#![allow(dead_code)]

/// The `<tag ...>...</tag>` element enclosing the first occurrence of `needle`.
pub fn element<'a>(html: &'a str, tag: &str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let start = html[..at].rfind(&format!("<{tag}"))?;
    let close = format!("</{tag}>");
    let end = at + html[at..].find(&close)? + close.len();
    Some(&html[start..end])
}

/// The opening tag (`<... >`) containing the first occurrence of `needle`.
pub fn open_tag<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')? + 1;
    Some(&html[start..end])
}

/// Every value of `attr="..."` in `fragment`, in document order.
pub fn attr_values<'a>(fragment: &'a str, attr: &str) -> Vec<&'a str> {
    let prefix = format!(" {attr}=\"");
    let mut values = Vec::new();
    let mut rest = fragment;
    while let Some(pos) = rest.find(&prefix) {
        rest = &rest[pos + prefix.len()..];
        let Some(end) = rest.find('"') else {
            break;
        };
        values.push(&rest[..end]);
        rest = &rest[end..];
    }
    values
}
