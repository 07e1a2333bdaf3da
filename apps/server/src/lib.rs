//! # Guide Server
//!
//! Renders the guide page on every request, serves its static assets and answers a
//! health probe.
//!
//! ```no_run
//! use mguide_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().config_url("guide.json").port(8080).build().await?.run().await
//! }
//! ```

pub mod router;

use anyhow::{Context, Result};
use axum_server::Handle;
use mguide::domain::config::AppConfig;
use mguide::kernel::loader::SourceFetcher;
use mguide::render::template::{TemplateOptions, guide_document};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// What every handler needs: settings, the configuration fetcher and the embedded
/// fallback text. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    config: AppConfig,
    fetcher: SourceFetcher,
    fallback_json: Option<Arc<str>>,
}

impl AppState {
    /// Builds the fetcher and reads the fallback document once, up front.
    ///
    /// # Errors
    /// Fails when `page.base_url` does not parse or the fallback file cannot be read.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let fetcher = SourceFetcher::from_settings(&config.page)
            .context("Invalid page source settings")?;

        let mut fallback_json = None;
        if let Some(path) = &config.page.fallback_path {
            let raw = tokio::fs::read_to_string(path).await.with_context(|| {
                format!("Failed to read fallback document {}", path.display())
            })?;
            fallback_json = Some(Arc::from(raw));
        }

        Ok(Self { config, fetcher, fallback_json })
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// One full page. The configuration document is fetched again on every call.
    pub async fn render(&self) -> String {
        let fallback = self.fallback_json.as_deref().map(str::to_owned);
        let template = guide_document(&TemplateOptions::from_settings(&self.config.page, fallback));
        mguide::render_page(template, &self.fetcher).await
    }
}

/// Collects overrides on top of the loaded settings.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    pub fn config_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.page.config_url = Some(url.into());
        self
    }

    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.page.assets_dir = dir.into();
        self
    }

    /// Prepares the shared state.
    ///
    /// # Errors
    /// See [`AppState::from_config`].
    pub async fn build(self) -> Result<Server> {
        if !self.cfg.page.assets_dir.is_dir() {
            warn!(dir = %self.cfg.page.assets_dir.display(), "Assets directory not found");
        }
        let state = AppState::from_config(self.cfg).await?;
        Ok(Server { state })
    }
}

/// A ready-to-run server.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Serves until Ctrl+C or SIGTERM, then drains connections for a short grace period.
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind.
    pub async fn run(self) -> Result<()> {
        let server = &self.state.config().server;
        let address = SocketAddr::new(server.address, server.port);
        info!(
            %address,
            config = self.state.config().page.config_url.as_deref().unwrap_or("-"),
            "Starting HTTP server"
        );

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(watch_shutdown(handle.clone()));

        axum_server::bind(address)
            .handle(handle)
            .serve(router::init(self.state).into_make_service())
            .await
            .with_context(|| format!("HTTP server on {address} failed"))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn watch_shutdown(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(name) => {
            info!(signal = name, "Shutting down");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        },
        Err(e) => error!(error = %e, "Cannot listen for shutdown signals"),
    }
}

/// Resolves with the name of the first termination signal received.
async fn shutdown_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => res.map(|()| "SIGINT"),
            _ = term.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.map(|()| "Ctrl+C")
    }
}
