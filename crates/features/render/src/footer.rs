use chrono::Datelike;
use mguide_dom::Document;
use mguide_domain::constants::{COPY_EMAIL_ID, COPY_YEAR_ID, DEFAULT_EMAIL};
use mguide_domain::page::Legal;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Writes the copyright year and contact address, defaulting both.
pub fn render(doc: &mut Document, legal: Option<&Legal>) {
    render_for_year(doc, legal, current_year());
}

/// [`render`] with an explicit default year.
pub fn render_for_year(doc: &mut Document, legal: Option<&Legal>, default_year: i32) {
    let year = legal
        .and_then(|l| l.year.as_ref())
        .map(ToString::to_string)
        .filter(|y| !y.is_empty())
        .unwrap_or_else(|| default_year.to_string());
    let email = legal
        .and_then(|l| l.email.as_deref())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EMAIL);

    if let Some(node) = doc.get_element_by_id(COPY_YEAR_ID) {
        doc.set_text(node, year);
    }
    if let Some(node) = doc.get_element_by_id(COPY_EMAIL_ID) {
        set_mail_link(doc, node, email);
    }
}

/// Fills only the footer placeholders that are still empty.
pub fn fill_missing(doc: &mut Document, default_year: i32) {
    if let Some(node) = doc.get_element_by_id(COPY_YEAR_ID)
        && doc.text_content(node).is_empty()
    {
        doc.set_text(node, default_year.to_string());
    }
    if let Some(node) = doc.get_element_by_id(COPY_EMAIL_ID)
        && doc.text_content(node).is_empty()
    {
        set_mail_link(doc, node, DEFAULT_EMAIL);
    }
}

fn set_mail_link(doc: &mut Document, node: mguide_dom::NodeId, email: &str) {
    doc.set_attr(node, "href", format!("mailto:{email}"));
    doc.set_text(node, email);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mguide_domain::page::Year;

    fn host(year: &str, email: &str) -> Document {
        let mut doc = Document::new();
        let body = doc.body();
        let y = doc.append_element(body, "span");
        doc.set_attr(y, "id", COPY_YEAR_ID);
        doc.set_text(y, year);
        let a = doc.append_element(body, "a");
        doc.set_attr(a, "id", COPY_EMAIL_ID);
        doc.set_text(a, email);
        doc
    }

    fn footer(doc: &Document) -> (String, String, Option<String>) {
        let y = doc.get_element_by_id(COPY_YEAR_ID).unwrap();
        let a = doc.get_element_by_id(COPY_EMAIL_ID).unwrap();
        (doc.text_content(y), doc.text_content(a), doc.attr(a, "href").map(str::to_owned))
    }

    #[test]
    fn test_defaults_when_legal_missing() {
        let mut doc = host("1999", "old@example.org");
        render_for_year(&mut doc, None, 2026);
        assert_eq!(
            footer(&doc),
            ("2026".to_owned(), DEFAULT_EMAIL.to_owned(), Some(format!("mailto:{DEFAULT_EMAIL}")))
        );
    }

    #[test]
    fn test_configured_values_win() {
        let mut doc = host("", "");
        let legal =
            Legal { year: Some(Year::Number(2024)), email: Some("hola@musicala.co".to_owned()) };
        render_for_year(&mut doc, Some(&legal), 2026);
        assert_eq!(
            footer(&doc),
            (
                "2024".to_owned(),
                "hola@musicala.co".to_owned(),
                Some("mailto:hola@musicala.co".to_owned())
            )
        );
    }

    #[test]
    fn test_fill_missing_keeps_existing_text() {
        let mut doc = host("2020", "");
        fill_missing(&mut doc, 2026);
        let (year, email, href) = footer(&doc);
        assert_eq!(year, "2020");
        assert_eq!(email, DEFAULT_EMAIL);
        assert_eq!(href.as_deref(), Some("mailto:imusicala@gmail.com"));
    }
}
