use mguide_dom::{Document, NodeId, Selector};
use mguide_domain::constants::ACCORDION_CLASS;

fn accordion() -> Selector {
    Selector::tag("details").with_class(ACCORDION_CLASS)
}

/// Runs after `node` changed its open state.
///
/// Opening an accordion block closes every other open block in the document, whichever
/// container it lives in. Closing, or toggling anything else, changes nothing.
pub fn on_toggle(doc: &mut Document, node: NodeId) {
    if !doc.matches(node, &accordion()) || !doc.is_open(node) {
        return;
    }
    for other in doc.query_all(&accordion().with_attr("open")) {
        if other != node {
            doc.set_open(other, false);
        }
    }
}

/// Flips a `<details>` and applies [`on_toggle`], like a click on its summary.
pub fn toggle(doc: &mut Document, details: NodeId) {
    let open = doc.is_open(details);
    doc.set_open(details, !open);
    on_toggle(doc, details);
}
