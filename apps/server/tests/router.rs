use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mguide::domain::config::AppConfig;
use mguide_server::{AppState, router};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

fn assets() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("guide.json"),
        r#"{ "meta": { "title": "Lectura rítmica" }, "keywords": ["pulso", "compás"] }"#,
    )
    .unwrap();
    fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
    dir
}

async fn state(dir: &TempDir, config_url: Option<&str>) -> AppState {
    let mut cfg = AppConfig::default();
    cfg.page.assets_dir = dir.path().to_path_buf();
    cfg.page.config_url = config_url.map(str::to_owned);
    AppState::from_config(cfg).await.unwrap()
}

async fn get(state: AppState, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = router::init(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_renders_configured_page() {
    let dir = assets();
    let (status, headers, body) = get(state(&dir, Some("guide.json")).await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains("<title>Lectura rítmica</title>"));
    assert!(body.contains(r#"<span class="keyword">compás</span>"#));
    assert!(body.contains(r#"data-config="guide.json""#));
}

#[tokio::test]
async fn test_index_survives_missing_config() {
    let dir = assets();
    let (status, _, body) = get(state(&dir, Some("missing.json")).await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Musicala · Guía</title>"));
    assert!(body.contains("imusicala@gmail.com"));
}

#[tokio::test]
async fn test_fallback_file_is_embedded_and_used() {
    let dir = assets();
    let fallback = dir.path().join("fallback.json");
    fs::write(&fallback, r#"{ "meta": { "title": "Copia embebida" } }"#).unwrap();

    let mut cfg = AppConfig::default();
    cfg.page.assets_dir = dir.path().to_path_buf();
    cfg.page.config_url = Some("missing.json".to_owned());
    cfg.page.fallback_path = Some(fallback);
    let state = AppState::from_config(cfg).await.unwrap();

    let (_, _, body) = get(state, "/").await;
    assert!(body.contains("<title>Copia embebida</title>"));
    assert!(body.contains(r#"id="APP_FALLBACK_JSON""#));
}

#[tokio::test]
async fn test_unreadable_fallback_fails_startup() {
    let dir = assets();
    let mut cfg = AppConfig::default();
    cfg.page.assets_dir = dir.path().to_path_buf();
    cfg.page.fallback_path = Some(dir.path().join("nope.json"));

    let err = AppState::from_config(cfg).await.unwrap_err();
    assert!(err.to_string().contains("fallback document"));
}

#[tokio::test]
async fn test_health_and_assets() {
    let dir = assets();

    let (status, _, body) = get(state(&dir, None).await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "up");

    let (status, _, body) = get(state(&dir, None).await, "/assets/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");

    let (status, _, _) = get(state(&dir, None).await, "/assets/absent.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
