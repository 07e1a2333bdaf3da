use mguide_domain::config::{AppConfig, LogSettings, PageSettings, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);

    let page = PageSettings::default();
    assert!(page.config_url.is_none());
    assert!(page.fallback_path.is_none());
    assert_eq!(page.assets_dir, std::path::PathBuf::from("public"));

    let log = LogSettings::default();
    assert_eq!(log.level, "info");
    assert!(!log.json);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 9000 },
        "page": { "config_url": "guide.json", "assets_dir": "/srv/guide" },
        "log": { "level": "debug", "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.page.config_url.as_deref(), Some("guide.json"));
    assert_eq!(cfg.page.assets_dir, std::path::PathBuf::from("/srv/guide"));
    assert_eq!(cfg.page.title, PageSettings::default().title);
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
}

#[test]
fn app_config_clones_share_until_mutated() {
    let base = AppConfig::default();
    let mut changed = base.clone();
    changed.server.port = 1234;

    assert_eq!(base.server.port, 8080);
    assert_eq!(changed.server.port, 1234);
}
