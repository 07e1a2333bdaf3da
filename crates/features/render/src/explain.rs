use mguide_dom::Document;
use mguide_domain::constants::{ACCORDION_CLASS, EXPLAIN_BLOCKS_ID, EXPLAIN_TITLE_ID, SECTION_LABEL};
use mguide_domain::page::ExplainBlock;

/// Rebuilds the explanation accordion: one `details.ac` per block, the first one open.
///
/// Headings default to "Sección N". Paragraphs and the hint are trusted markup.
/// Mutual exclusion between blocks is enforced by the page-wide accordion handler.
pub fn render(doc: &mut Document, blocks: &[ExplainBlock], title: &str) {
    let Some(host) = doc.get_element_by_id(EXPLAIN_BLOCKS_ID) else { return };
    if let Some(heading) = doc.get_element_by_id(EXPLAIN_TITLE_ID) {
        doc.set_text(heading, title);
    }

    doc.clear_children(host);
    for (i, block) in blocks.iter().enumerate() {
        let details = doc.append_element(host, "details");
        doc.add_class(details, ACCORDION_CLASS);
        doc.set_open(details, i == 0);

        let summary = doc.append_element(details, "summary");
        match block.heading.as_deref().filter(|h| !h.is_empty()) {
            Some(heading) => {
                doc.append_raw(summary, heading);
            },
            None => {
                doc.append_text(summary, format!("{SECTION_LABEL} {}", i + 1));
            },
        }

        for paragraph in &block.paragraphs {
            let p = doc.append_element(details, "p");
            doc.set_inner_html(p, paragraph.as_str());
        }
        if let Some(hint) = block.hint.as_deref().filter(|h| !h.is_empty()) {
            let p = doc.append_element(details, "p");
            doc.add_class(p, "hint");
            doc.set_inner_html(p, hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mguide_dom::Selector;

    fn block(heading: Option<&str>, paragraphs: &[&str], hint: Option<&str>) -> ExplainBlock {
        ExplainBlock {
            heading: heading.map(str::to_owned),
            paragraphs: paragraphs.iter().map(|p| (*p).to_owned()).collect(),
            hint: hint.map(str::to_owned),
        }
    }

    #[test]
    fn test_first_block_open_rest_closed() {
        let mut doc = Document::new();
        let body = doc.body();
        let title = doc.append_element(body, "h2");
        doc.set_attr(title, "id", EXPLAIN_TITLE_ID);
        let host = doc.append_element(body, "div");
        doc.set_attr(host, "id", EXPLAIN_BLOCKS_ID);

        let blocks = [
            block(Some("El <em>pulso</em>"), &["Uno", "Dos"], Some("Cuenta en voz alta")),
            block(None, &[], None),
            block(Some(""), &["Tres"], None),
        ];
        render(&mut doc, &blocks, "Teoría");

        assert_eq!(doc.text_content(title), "Teoría");
        let details = doc.query_all_within(host, &Selector::tag("details").with_class("ac"));
        assert_eq!(details.len(), 3);
        assert!(doc.is_open(details[0]));
        assert!(!doc.is_open(details[1]));
        assert!(!doc.is_open(details[2]));

        let summaries: Vec<String> = doc
            .query_all_within(host, &Selector::tag("summary"))
            .into_iter()
            .map(|s| doc.inner_html(s))
            .collect();
        assert_eq!(summaries, ["El <em>pulso</em>", "Sección 2", "Sección 3"]);

        assert_eq!(doc.query_all_within(details[0], &Selector::tag("p")).len(), 3);
        assert!(doc.query_within(details[0], &Selector::tag("p").with_class("hint")).is_some());
        assert!(doc.query_within(details[1], &Selector::tag("p")).is_none());
    }

    #[test]
    fn test_missing_host_is_ignored() {
        let mut doc = Document::new();
        render(&mut doc, &[block(None, &["x"], None)], "T");
        assert!(doc.query(&Selector::tag("details")).is_none());
    }
}
