use mguide_dom::{Document, NodeId, Selector};
use mguide_domain::constants::{TAB_CLASS, TAB_PANELS_ID, TABS_ID};
use mguide_render::tabs::panel_id;

/// Selects `tab`: it alone is marked selected and only its panel stays visible.
///
/// Returns `false` when `tab` is not a tab of `#tabs`.
pub fn select(doc: &mut Document, tab: NodeId) -> bool {
    let Some(strip) = doc.get_element_by_id(TABS_ID) else { return false };
    let buttons = doc.query_all_within(strip, &Selector::class(TAB_CLASS));
    if !buttons.contains(&tab) {
        return false;
    }
    let key = doc.attr(tab, "data-tab").unwrap_or_default().to_owned();

    for button in buttons {
        doc.set_attr(button, "aria-selected", if button == tab { "true" } else { "false" });
    }

    if let Some(host) = doc.get_element_by_id(TAB_PANELS_ID) {
        let target = panel_id(&key);
        for panel in doc.child_elements(host) {
            if doc.tag(panel) != Some("div") {
                continue;
            }
            let shown = doc.id(panel) == Some(target.as_str());
            doc.set_hidden(panel, !shown);
        }
    }
    true
}
