use mguide_dom::Document;
use mguide_domain::constants::{PANEL_ID_PREFIX, TAB_CLASS, TAB_PANELS_ID, TABS_ID};
use mguide_domain::page::{PanelDef, TabDef, Tabs};
use std::collections::HashSet;
use tracing::warn;

/// Id of the panel shown by the tab with `key`.
pub fn panel_id(key: &str) -> String {
    format!("{PANEL_ID_PREFIX}{key}")
}

/// Pairs each tab with the panel sharing its key, in tab order.
///
/// Tabs without a panel and panels without a tab are dropped; a repeated tab key keeps
/// its first occurrence, and the first panel with a given key wins.
pub fn pair_up<'a>(tabs: &'a [TabDef], panels: &'a [PanelDef]) -> Vec<(&'a TabDef, &'a PanelDef)> {
    let mut seen = HashSet::new();
    tabs.iter()
        .filter(|t| seen.insert(t.key.as_str()))
        .filter_map(|t| panels.iter().find(|p| p.key == t.key).map(|p| (t, p)))
        .collect()
}

/// Rebuilds the tab strip and its panels. The first pair starts selected and visible.
pub fn render(doc: &mut Document, tabs: &Tabs) {
    let (Some(strip), Some(panel_host)) =
        (doc.get_element_by_id(TABS_ID), doc.get_element_by_id(TAB_PANELS_ID))
    else {
        return;
    };
    let (Some(defs), Some(panels)) = (&tabs.tabs, &tabs.panels) else { return };

    let pairs = pair_up(defs, panels);
    if pairs.len() != defs.len() || pairs.len() != panels.len() {
        warn!(
            tabs = defs.len(),
            panels = panels.len(),
            rendered = pairs.len(),
            "Tabs and panels do not match one to one; unmatched entries skipped"
        );
    }

    doc.clear_children(strip);
    doc.clear_children(panel_host);

    for (i, (tab, panel)) in pairs.into_iter().enumerate() {
        let active = i == 0;
        let id = panel_id(&tab.key);

        let button = doc.append_element(strip, "button");
        doc.add_class(button, TAB_CLASS);
        doc.set_attr(button, "type", "button");
        doc.set_attr(button, "role", "tab");
        doc.set_attr(button, "data-tab", tab.key.as_str());
        doc.set_attr(button, "aria-controls", id.as_str());
        doc.set_attr(button, "aria-selected", if active { "true" } else { "false" });
        doc.set_text(button, tab.label.as_str());

        let div = doc.append_element(panel_host, "div");
        doc.set_attr(div, "id", id);
        doc.set_attr(div, "role", "tabpanel");
        doc.set_hidden(div, !active);

        if let Some(items) = &panel.items {
            let list = doc.append_element(div, "ul");
            doc.add_class(list, "list-clean");
            for item in items {
                let li = doc.append_element(list, "li");
                doc.set_inner_html(li, item.as_str());
            }
        } else if let Some(html) = panel.html.as_deref().filter(|h| !h.is_empty()) {
            doc.set_inner_html(div, html);
        }
    }
}
