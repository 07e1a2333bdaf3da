use crate::util::present;
use mguide_dom::{Document, Selector};
use mguide_domain::constants::{
    DEFAULT_ROUTINE_TITLE, ROUTINE_LIST_ID, ROUTINE_SECTION_ID, ROUTINE_SUBTITLE_ID,
    ROUTINE_TIP_ID, ROUTINE_TITLE_ID, STEP_LABEL, TIP_LABEL,
};
use mguide_domain::page::{Routine, RoutineItem};

/// A routine entry after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

impl Step {
    /// Resolves the entry at zero-based `index`. Untitled steps are called "Paso N".
    pub fn from_item(index: usize, item: &RoutineItem) -> Self {
        let number = index + 1;
        let fallback_title = || format!("{STEP_LABEL} {number}");
        match item {
            RoutineItem::Plain(text) => {
                Self { number, title: fallback_title(), description: text.clone(), icon: None }
            },
            RoutineItem::Detailed { title, desc, text, icon } => Self {
                number,
                title: present(title.as_deref()).map_or_else(fallback_title, str::to_owned),
                description: present(desc.as_deref())
                    .or_else(|| present(text.as_deref()))
                    .unwrap_or_default()
                    .to_owned(),
                icon: present(icon.as_deref()).map(str::to_owned),
            },
        }
    }
}

/// Renders the numbered routine. An empty item list hides the whole section.
///
/// Subtitle and tip regions are shown only when the routine provides them.
pub fn render(doc: &mut Document, routine: &Routine) {
    let Some(list) = doc.get_element_by_id(ROUTINE_LIST_ID) else { return };
    let section = doc.get_element_by_id(ROUTINE_SECTION_ID);

    if routine.items.is_empty() {
        if let Some(section) = section {
            doc.set_hidden(section, true);
        }
        return;
    }
    if let Some(section) = section {
        doc.set_hidden(section, false);
    }

    if let Some(heading) = doc.get_element_by_id(ROUTINE_TITLE_ID) {
        let title = present(routine.title.as_deref()).unwrap_or(DEFAULT_ROUTINE_TITLE);
        doc.set_text(heading, title);
    }
    if let Some(sub) = doc.get_element_by_id(ROUTINE_SUBTITLE_ID) {
        match present(routine.subtitle.as_deref()) {
            Some(subtitle) => {
                doc.set_text(sub, subtitle);
                doc.set_hidden(sub, false);
            },
            None => doc.set_hidden(sub, true),
        }
    }

    doc.clear_children(list);
    for (index, item) in routine.items.iter().enumerate() {
        append_step(doc, list, &Step::from_item(index, item));
    }

    if let Some(tip_box) = doc.get_element_by_id(ROUTINE_TIP_ID) {
        match present(routine.tip.as_deref()) {
            Some(tip) => {
                let p = match doc.query_within(tip_box, &Selector::tag("p")) {
                    Some(p) => p,
                    None => doc.append_element(tip_box, "p"),
                };
                doc.set_inner_html(p, format!("<b>{TIP_LABEL}</b> {tip}"));
                doc.set_hidden(tip_box, false);
            },
            None => doc.set_hidden(tip_box, true),
        }
    }
}

fn append_step(doc: &mut Document, list: mguide_dom::NodeId, step: &Step) {
    let li = doc.append_element(list, "li");
    doc.add_class(li, "step");

    let badge = doc.append_element(li, "span");
    doc.add_class(badge, "badge");
    doc.set_text(badge, step.number.to_string());

    let heading = doc.append_element(li, "h4");
    if let Some(icon) = &step.icon {
        let span = doc.append_element(heading, "span");
        doc.add_class(span, "icon");
        doc.set_inner_html(span, icon.as_str());
    }
    doc.append_raw(heading, step.title.as_str());

    let body = doc.append_element(li, "p");
    doc.set_inner_html(body, step.description.as_str());
}
