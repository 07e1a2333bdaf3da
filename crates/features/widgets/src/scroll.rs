use mguide_dom::{Document, NodeId, Selector};

/// Request to scroll `target` smoothly to the top of the viewport, emitted instead of
/// following an in-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
}

/// Turns a click inside `a[href^="#"]` into a smooth scroll when the anchor exists.
///
/// `None` means the click is not an in-page jump and default navigation proceeds.
pub fn intercept(doc: &Document, clicked: NodeId) -> Option<ScrollRequest> {
    let link = doc.closest(clicked, &Selector::tag("a").with_attr_prefix("href", "#"))?;
    let fragment = doc.attr(link, "href")?.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let target = doc.get_element_by_id(fragment)?;
    Some(ScrollRequest { target })
}
