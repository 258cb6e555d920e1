//! Primitive presenters: one piece of content in, one styled element out.
//!
//! The optional class override is appended to the primitive's base class.

use super::node::{Element, Node, Role};

fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// Inline tag chip.
pub fn tag(content: impl Into<Node>, class: Option<&str>) -> Element {
    Element::new(Role::Tag)
        .with_class(merge_class("tag", class))
        .child(content)
}

/// Table header cell.
pub fn th(content: impl Into<Node>, class: Option<&str>) -> Element {
    Element::new(Role::HeaderCell)
        .with_class(merge_class("th", class))
        .child(content)
}

/// Table data cell.
pub fn td(content: impl Into<Node>, class: Option<&str>) -> Element {
    Element::new(Role::DataCell)
        .with_class(merge_class("td", class))
        .child(content)
}

/// Small bullet marker.
pub fn bullet() -> Element {
    Element::new(Role::Bullet).with_class("bullet")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_appended_to_base_class() {
        assert_eq!(tag("NLP", None).class.as_deref(), Some("tag"));
        assert_eq!(td("x", Some("cell-score")).class.as_deref(), Some("td cell-score"));
        assert_eq!(th("Model", Some("")).class.as_deref(), Some("th"));
    }

    #[test]
    fn content_passes_through_unchanged() {
        let cell = td("≈ 0.92", None);
        assert_eq!(cell.role, Role::DataCell);
        assert_eq!(cell.text(), "≈ 0.92");

        let header = th("F1 (modified class)", None);
        assert_eq!(header.role, Role::HeaderCell);
        assert_eq!(header.text(), "F1 (modified class)");
    }

    #[test]
    fn bullet_has_no_content() {
        let b = bullet();
        assert_eq!(b.role, Role::Bullet);
        assert!(b.children.is_empty());
    }
}
