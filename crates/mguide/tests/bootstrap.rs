use mguide::domain::constants::{COPY_EMAIL_ID, CTA_LABEL_ID, DEFAULT_EMAIL, PAGE_TITLE_ID};
use mguide::kernel::loader::{Fetch, LoaderError};
use mguide::render::template::{TemplateOptions, guide_document};
use mguide::widgets::audio::{HeadlessMedia, MediaPlayer};
use mguide::{bootstrap, render_page};
use serde_json::json;
use std::collections::HashMap;

struct MapFetcher(HashMap<&'static str, String>);

impl MapFetcher {
    fn empty() -> Self {
        Self(HashMap::new())
    }

    fn with(location: &'static str, body: &serde_json::Value) -> Self {
        Self(HashMap::from([(location, body.to_string())]))
    }
}

impl Fetch for MapFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoaderError> {
        self.0.get(location).cloned().ok_or_else(|| LoaderError::Status {
            message: "HTTP 404".into(),
            context: Some(location.to_owned().into()),
        })
    }
}

fn host(config_url: Option<&str>, fallback: Option<serde_json::Value>) -> mguide::dom::Document {
    guide_document(&TemplateOptions {
        title: "Musicala".to_owned(),
        config_url: config_url.map(str::to_owned),
        fallback_json: fallback.map(|v| v.to_string()),
        ..TemplateOptions::default()
    })
}

#[tokio::test(start_paused = true)]
async fn test_bootstrap_applies_fetched_config_and_mounts_audio() {
    let fetcher = MapFetcher::with(
        "guide.json",
        &json!({
            "meta": { "title": "Lectura rítmica" },
            "audio": { "src": "/audio/intro.mp3", "cta_idle": "Escucha" }
        }),
    );

    let page = bootstrap(host(Some("guide.json"), None), &fetcher, HeadlessMedia::default()).await;

    let doc = page.document();
    let doc = doc.lock();
    assert_eq!(doc.title(), "Lectura rítmica");
    let heading = doc.get_element_by_id(PAGE_TITLE_ID).unwrap();
    assert_eq!(doc.text_content(heading), "Lectura rítmica");
    let label = doc.get_element_by_id(CTA_LABEL_ID).unwrap();
    assert_eq!(doc.text_content(label), "Escucha");

    let audio = page.audio().unwrap();
    assert!(audio.media().is_paused());
    assert_eq!(audio.media().sources().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_bootstrap_falls_back_to_embedded_copy() {
    let fallback = json!({ "meta": { "title": "Copia local" } });
    let document = host(Some("gone.json"), Some(fallback));
    let page = bootstrap(document, &MapFetcher::empty(), HeadlessMedia::default()).await;

    assert_eq!(page.document().lock().title(), "Copia local");
    assert!(page.audio().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_bootstrap_without_declared_config_keeps_static_page() {
    let fetcher = MapFetcher::with("guide.json", &json!({ "meta": { "title": "Ignorada" } }));
    let page = bootstrap(host(None, None), &fetcher, HeadlessMedia::default()).await;

    let doc = page.document();
    let doc = doc.lock();
    assert_eq!(doc.title(), "Musicala");
    let mail = doc.get_element_by_id(COPY_EMAIL_ID).unwrap();
    assert_eq!(doc.text_content(mail), DEFAULT_EMAIL);
    assert_eq!(doc.attr(mail, "href"), Some("mailto:imusicala@gmail.com"));
}

#[tokio::test]
async fn test_render_page_serializes_applied_config() {
    let fetcher = MapFetcher::with(
        "guide.json",
        &json!({
            "keywords": ["pulso"],
            "legal": { "year": "2023–2025", "email": "hola@musicala.co" }
        }),
    );

    let html = render_page(host(Some("guide.json"), None), &fetcher).await;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<span class="keyword">pulso</span>"#));
    assert!(html.contains("2023–2025"));
    assert!(html.contains("mailto:hola@musicala.co"));
}
