use mguide_dom::Document;
use mguide_domain::constants::{CHIPS_HINT_ID, KEYWORDS_ID};

/// Renders one `span.keyword` chip per entry, in order.
///
/// An empty list hides both the chip container and its hint.
pub fn render(doc: &mut Document, list: &[String]) {
    let Some(container) = doc.get_element_by_id(KEYWORDS_ID) else { return };
    let hint = doc.get_element_by_id(CHIPS_HINT_ID);

    let empty = list.is_empty();
    doc.set_hidden(container, empty);
    if let Some(hint) = hint {
        doc.set_hidden(hint, empty);
    }
    if empty {
        return;
    }

    doc.clear_children(container);
    for keyword in list {
        let chip = doc.append_element(container, "span");
        doc.add_class(chip, "keyword");
        doc.set_text(chip, keyword.as_str());
    }
}
