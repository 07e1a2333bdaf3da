use mguide_dom::Document;
use mguide_domain::constants::{EXAMPLES_GRID_ID, EXAMPLES_SECTION_ID};
use mguide_domain::page::ExampleItem;

/// Upper-cases the first character only: `"ritmo lento"` becomes `"Ritmo lento"`.
pub fn capitalize_first(tag: &str) -> String {
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Renders one `article.card.example-card` per item; an empty list hides the section.
pub fn render(doc: &mut Document, items: &[ExampleItem]) {
    let Some(grid) = doc.get_element_by_id(EXAMPLES_GRID_ID) else { return };
    let section = doc.get_element_by_id(EXAMPLES_SECTION_ID);

    if items.is_empty() {
        if let Some(section) = section {
            doc.set_hidden(section, true);
        }
        return;
    }
    if let Some(section) = section {
        doc.set_hidden(section, false);
    }

    doc.clear_children(grid);
    for item in items {
        let card = doc.append_element(grid, "article");
        doc.add_class(card, "card");
        doc.add_class(card, "example-card");

        for tag in &item.tags {
            let badge = doc.append_element(card, "span");
            doc.add_class(badge, "badge");
            doc.set_inner_html(badge, capitalize_first(tag));
        }
        let title = doc.append_element(card, "h3");
        doc.set_inner_html(title, item.title.as_deref().unwrap_or_default());
        let desc = doc.append_element(card, "p");
        doc.add_class(desc, "muted");
        doc.set_inner_html(desc, item.desc.as_deref().unwrap_or_default());
    }
}
