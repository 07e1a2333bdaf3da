//! Document metadata: `<title>`, description and theme colour, plus the visible headline.

use crate::util::present;
use mguide_dom::{Document, Selector};
use mguide_domain::constants::{PAGE_SUBTITLE_ID, PAGE_TITLE_ID};
use mguide_domain::page::Meta;

/// Sets `<title>`, `meta[name=description]` and `meta[name=theme-color]`.
///
/// Missing meta tags are created in `<head>`; existing ones are updated in place.
pub fn apply(doc: &mut Document, meta: &Meta) {
    if let Some(title) = present(meta.title.as_deref()) {
        doc.set_title(title);
    }
    if let Some(description) = present(meta.description.as_deref()) {
        upsert_named_meta(doc, "description", description);
    }
    if let Some(color) = present(meta.theme_color.as_deref()) {
        upsert_named_meta(doc, "theme-color", color);
    }
}

/// Mirrors `meta.title` / `meta.subtitle` into `#pageTitle` / `#pageSubtitle`.
pub fn apply_headline(doc: &mut Document, meta: &Meta) {
    if let Some(title) = present(meta.title.as_deref())
        && let Some(node) = doc.get_element_by_id(PAGE_TITLE_ID)
    {
        doc.set_text(node, title);
    }
    if let Some(subtitle) = present(meta.subtitle.as_deref())
        && let Some(node) = doc.get_element_by_id(PAGE_SUBTITLE_ID)
    {
        doc.set_text(node, subtitle);
    }
}

fn upsert_named_meta(doc: &mut Document, name: &str, content: &str) {
    let node = match doc.query(&Selector::tag("meta").with_attr_eq("name", name)) {
        Some(node) => node,
        None => {
            let head = doc.head();
            let node = doc.append_element(head, "meta");
            doc.set_attr(node, "name", name);
            node
        },
    };
    doc.set_attr(node, "content", content);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, description: &str, color: &str) -> Meta {
        Meta {
            title: Some(title.to_owned()),
            subtitle: None,
            description: Some(description.to_owned()),
            theme_color: Some(color.to_owned()),
        }
    }

    #[test]
    fn test_creates_missing_meta_tags_once() {
        let mut doc = Document::new();
        let m = meta("Ritmo", "Guía de ritmo", "#ff6600");

        apply(&mut doc, &m);
        apply(&mut doc, &m);

        assert_eq!(doc.title(), "Ritmo");
        let tags = doc.query_all(&Selector::tag("meta"));
        assert_eq!(tags.len(), 2);
        let theme = doc.query(&Selector::tag("meta").with_attr_eq("name", "theme-color")).unwrap();
        assert_eq!(doc.attr(theme, "content"), Some("#ff6600"));
    }

    #[test]
    fn test_updates_existing_description() {
        let mut doc = Document::new();
        let head = doc.head();
        let existing = doc.append_element(head, "meta");
        doc.set_attr(existing, "name", "description");
        doc.set_attr(existing, "content", "old");

        apply(&mut doc, &meta("T", "new", "#000"));
        assert_eq!(doc.attr(existing, "content"), Some("new"));
        assert_eq!(
            doc.query_all(&Selector::tag("meta").with_attr_eq("name", "description")).len(),
            1
        );
    }

    #[test]
    fn test_empty_strings_leave_document_alone() {
        let mut doc = Document::new();
        doc.set_title("Static");
        apply(&mut doc, &meta("", "", ""));
        assert_eq!(doc.title(), "Static");
        assert!(doc.query(&Selector::tag("meta")).is_none());
    }
}
