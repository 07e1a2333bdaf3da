use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application settings shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub page: PageSettings,
    pub log: LogSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Where the page comes from and how its optional configuration document is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Written into `#app[data-config]`. `None` means the page renders its static markup.
    pub config_url: Option<String>,
    /// File whose contents become the embedded `#APP_FALLBACK_JSON` document.
    pub fallback_path: Option<PathBuf>,
    /// Base for relative config URLs. Without it, relative URLs are read from `assets_dir`.
    pub base_url: Option<String>,
    /// Static assets root, also served under `/assets`.
    pub assets_dir: PathBuf,
    /// Static `<title>` used before any configuration is applied.
    pub title: String,
    /// Stylesheet linked from the host markup.
    pub stylesheet: Option<String>,
    /// Video identifiers rendered as lazy embed placeholders.
    pub videos: Vec<String>,
}

/// Logging knobs consumed by `mguide-logger`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default level directive (`RUST_LOG` still wins).
    pub level: String,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8080 }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            config_url: None,
            fallback_path: None,
            base_url: None,
            assets_dir: PathBuf::from("public"),
            title: "Musicala · Guía".to_owned(),
            stylesheet: Some("/assets/styles.css".to_owned()),
            videos: Vec::new(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
