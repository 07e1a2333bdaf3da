//! Static host markup.
//!
//! The template carries every element the populators and widgets look for, with generic
//! Spanish copy, so a page without any configuration document is still complete.

use mguide_dom::{Document, NodeId};
use mguide_domain::config::PageSettings;
use mguide_domain::constants::{
    ACCORDION_CLASS, APP_ID, AUDIO_ID, BRAND_LOGO_ID, CHIPS_HINT_ID, COPY_EMAIL_ID, COPY_YEAR_ID,
    CTA_LABEL_ID, DEFAULT_CTA_IDLE, DEFAULT_EXPLAIN_TITLE, DEFAULT_EYEBROW, DEFAULT_INTRO_TITLE,
    DEFAULT_ROUTINE_TITLE, EXAMPLES_GRID_ID, EXAMPLES_SECTION_ID, EXPLAIN_BLOCKS_ID,
    EXPLAIN_TITLE_ID, FALLBACK_JSON_ID, HERO_IMAGE_ID, INTRO_EYEBROW_ID, INTRO_LEAD_ID,
    INTRO_TITLE_ID, KEYWORDS_ID, LITE_VIDEO_CLASS, PAGE_SUBTITLE_ID, PAGE_TITLE_ID,
    PLAY_BUTTON_ID, ROUTINE_LIST_ID, ROUTINE_SECTION_ID, ROUTINE_SUBTITLE_ID, ROUTINE_TIP_ID,
    ROUTINE_TITLE_ID, TAB_PANELS_ID, TABS_ID, TOAST_ID, VIDEO_ID_ATTR,
};

/// Knobs for [`guide_document`].
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub title: String,
    /// Written to `#app[data-config]`.
    pub config_url: Option<String>,
    /// Text of `script#APP_FALLBACK_JSON`; the script is omitted when `None`.
    pub fallback_json: Option<String>,
    pub stylesheet: Option<String>,
    /// One lazy placeholder per id.
    pub videos: Vec<String>,
}

impl TemplateOptions {
    /// Options from `[page]` settings; the fallback text is read by the caller.
    pub fn from_settings(settings: &PageSettings, fallback_json: Option<String>) -> Self {
        Self {
            title: settings.title.clone(),
            config_url: settings.config_url.clone(),
            fallback_json,
            stylesheet: settings.stylesheet.clone(),
            videos: settings.videos.clone(),
        }
    }
}

fn el(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = doc.append_element(parent, tag);
    for (name, value) in attrs {
        doc.set_attr(node, name, *value);
    }
    node
}

fn text_el(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> NodeId {
    let node = el(doc, parent, tag, attrs);
    doc.set_text(node, text);
    node
}

/// Builds the host page.
pub fn guide_document(opts: &TemplateOptions) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    doc.set_attr(root, "lang", "es");

    let head = doc.head();
    el(&mut doc, head, "meta", &[("charset", "utf-8")]);
    el(
        &mut doc,
        head,
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    );
    doc.set_title(opts.title.as_str());
    if let Some(href) = &opts.stylesheet {
        el(&mut doc, head, "link", &[("rel", "stylesheet"), ("href", href)]);
    }

    let body = doc.body();
    build_topbar(&mut doc, body, &opts.title);

    let app = el(&mut doc, body, "main", &[("id", APP_ID)]);
    if let Some(url) = &opts.config_url {
        doc.set_attr(app, "data-config", url.as_str());
    }
    build_intro(&mut doc, app);
    build_explain(&mut doc, app);
    build_practice(&mut doc, app);
    build_videos(&mut doc, app, &opts.videos);

    let footer = el(&mut doc, body, "footer", &[("class", "footer")]);
    let line = el(&mut doc, footer, "p", &[]);
    doc.append_text(line, "© ");
    el(&mut doc, line, "span", &[("id", COPY_YEAR_ID)]);
    doc.append_text(line, " Musicala · ");
    el(&mut doc, line, "a", &[("id", COPY_EMAIL_ID)]);

    el(
        &mut doc,
        body,
        "div",
        &[("id", TOAST_ID), ("class", "toast"), ("role", "status"), ("aria-live", "polite")],
    );

    if let Some(raw) = &opts.fallback_json {
        let script =
            el(&mut doc, body, "script", &[("id", FALLBACK_JSON_ID), ("type", "application/json")]);
        doc.set_text(script, script_safe_json(raw));
    }

    doc
}

/// Keeps `</script>` inside a JSON string from closing the element. `<\/` decodes to `</`.
fn script_safe_json(raw: &str) -> String {
    raw.replace("</", "<\\/")
}

fn build_topbar(doc: &mut Document, body: NodeId, title: &str) {
    let header = el(doc, body, "header", &[("class", "topbar")]);
    el(
        doc,
        header,
        "img",
        &[("id", BRAND_LOGO_ID), ("src", "/assets/logo.png"), ("alt", "Musicala")],
    );

    let heading = el(doc, header, "div", &[("class", "headline")]);
    text_el(doc, heading, "h1", &[("id", PAGE_TITLE_ID)], title);
    text_el(doc, heading, "p", &[("id", PAGE_SUBTITLE_ID), ("class", "muted")], "Guía de estudio");

    let group = el(
        doc,
        header,
        "div",
        &[("class", "audio-cta"), ("role", "group"), ("aria-label", "Audio")],
    );
    let button = el(
        doc,
        group,
        "button",
        &[("id", PLAY_BUTTON_ID), ("type", "button"), ("aria-pressed", "false")],
    );
    text_el(doc, button, "span", &[("id", CTA_LABEL_ID)], DEFAULT_CTA_IDLE);
    el(doc, group, "audio", &[("id", AUDIO_ID), ("preload", "none")]);
}

fn build_intro(doc: &mut Document, app: NodeId) {
    let hero = el(doc, app, "section", &[("id", "section-intro"), ("class", "hero")]);
    text_el(doc, hero, "p", &[("id", INTRO_EYEBROW_ID), ("class", "eyebrow")], DEFAULT_EYEBROW);
    text_el(doc, hero, "h2", &[("id", INTRO_TITLE_ID)], DEFAULT_INTRO_TITLE);
    el(doc, hero, "p", &[("id", INTRO_LEAD_ID), ("class", "lead")]);
    el(doc, hero, "img", &[("id", HERO_IMAGE_ID), ("alt", ""), ("loading", "lazy")]);

    let chips = el(doc, app, "section", &[("id", "section-keywords")]);
    el(doc, chips, "div", &[("id", KEYWORDS_ID), ("class", "chips")]);
    text_el(
        doc,
        chips,
        "p",
        &[("id", CHIPS_HINT_ID), ("class", "hint")],
        "Palabras clave de esta guía.",
    );
}

fn build_explain(doc: &mut Document, app: NodeId) {
    let section = el(doc, app, "section", &[("id", "section-explain")]);
    text_el(doc, section, "h2", &[("id", EXPLAIN_TITLE_ID)], DEFAULT_EXPLAIN_TITLE);
    let blocks = el(doc, section, "div", &[("id", EXPLAIN_BLOCKS_ID)]);

    let details = el(doc, blocks, "details", &[("class", ACCORDION_CLASS), ("open", "")]);
    text_el(doc, details, "summary", &[], "Sección 1");
    text_el(doc, details, "p", &[], "El contenido de esta guía aparecerá aquí.");
}

fn build_practice(doc: &mut Document, app: NodeId) {
    let tabs = el(doc, app, "section", &[("id", "section-tabs")]);
    el(doc, tabs, "div", &[("id", TABS_ID), ("class", "tabs"), ("role", "tablist")]);
    el(doc, tabs, "div", &[("id", TAB_PANELS_ID)]);

    let examples = el(doc, app, "section", &[("id", EXAMPLES_SECTION_ID)]);
    text_el(doc, examples, "h2", &[], "Ejemplos");
    el(doc, examples, "div", &[("id", EXAMPLES_GRID_ID), ("class", "grid")]);

    let routine = el(doc, app, "section", &[("id", ROUTINE_SECTION_ID)]);
    text_el(doc, routine, "h2", &[("id", ROUTINE_TITLE_ID)], DEFAULT_ROUTINE_TITLE);
    el(doc, routine, "p", &[("id", ROUTINE_SUBTITLE_ID), ("class", "muted"), ("hidden", "")]);
    el(doc, routine, "ol", &[("id", ROUTINE_LIST_ID), ("class", "steps")]);
    let tip =
        el(doc, routine, "aside", &[("id", ROUTINE_TIP_ID), ("class", "tip"), ("hidden", "")]);
    el(doc, tip, "p", &[]);
}

fn build_videos(doc: &mut Document, app: NodeId, videos: &[String]) {
    if videos.is_empty() {
        return;
    }
    let section = el(doc, app, "section", &[("id", "section-video")]);
    for id in videos {
        let button = el(
            doc,
            section,
            "button",
            &[
                ("class", LITE_VIDEO_CLASS),
                ("type", "button"),
                (VIDEO_ID_ATTR, id),
                ("aria-label", "Reproducir video"),
            ],
        );
        text_el(doc, button, "span", &[("class", "lite-play")], "▶");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mguide_dom::Selector;

    #[test]
    fn test_template_exposes_host_contract() {
        let doc = guide_document(&TemplateOptions {
            title: "Guía".to_owned(),
            config_url: Some("guide.json".to_owned()),
            fallback_json: Some("{}".to_owned()),
            stylesheet: None,
            videos: vec!["abc123".to_owned()],
        });

        for id in [
            APP_ID, TOAST_ID, AUDIO_ID, PLAY_BUTTON_ID, CTA_LABEL_ID, KEYWORDS_ID, CHIPS_HINT_ID,
            EXPLAIN_BLOCKS_ID, TABS_ID, TAB_PANELS_ID, EXAMPLES_GRID_ID, ROUTINE_LIST_ID,
            ROUTINE_TIP_ID, COPY_YEAR_ID, COPY_EMAIL_ID, FALLBACK_JSON_ID,
        ] {
            assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
        }

        let app = doc.get_element_by_id(APP_ID).unwrap();
        assert_eq!(doc.attr(app, "data-config"), Some("guide.json"));
        assert_eq!(doc.title(), "Guía");
        assert_eq!(
            doc.query_all(&Selector::class(LITE_VIDEO_CLASS).with_attr(VIDEO_ID_ATTR)).len(),
            1
        );
        assert!(doc.query(&Selector::tag("link")).is_none());
    }

    #[test]
    fn test_fallback_cannot_close_its_script() {
        let raw = r#"{ "explain": { "title": "</script><b>x</b>" } }"#;
        let doc = guide_document(&TemplateOptions {
            fallback_json: Some(raw.to_owned()),
            ..TemplateOptions::default()
        });

        let html = doc.to_html();
        assert_eq!(html.matches("</script>").count(), 1);

        let script = doc.get_element_by_id(FALLBACK_JSON_ID).unwrap();
        let embedded: serde_json::Value = serde_json::from_str(&doc.text_content(script)).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(embedded, original);
    }

    #[test]
    fn test_template_without_config_or_fallback() {
        let doc = guide_document(&TemplateOptions::default());
        let app = doc.get_element_by_id(APP_ID).unwrap();
        assert!(doc.attr(app, "data-config").is_none());
        assert!(doc.get_element_by_id(FALLBACK_JSON_ID).is_none());
        assert!(doc.get_element_by_id("section-video").is_none());
    }
}
