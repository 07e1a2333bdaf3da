use anyhow::Context;
use clap::{Parser, Subcommand};
use mguide::domain::config::AppConfig;
use mguide::kernel::config::{DEFAULT_SETTINGS_FILE, load_config};
use mguide::kernel::server::health;
use mguide_logger::Logger;
use mguide_server::{AppState, Server};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Serve or pre-render a Musicala guide page")]
struct Cli {
    /// Settings file (TOML, JSON or YAML). Defaults to `guide.*` when present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render the page once and write the HTML.
    Render {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_settings(env!("CARGO_PKG_NAME"), &cfg.log)?;
    health::mark_start();
    match &cli.config {
        Some(path) => info!(path = %path.display(), "Settings loaded"),
        None => info!(lookup = DEFAULT_SETTINGS_FILE, "Settings loaded"),
    }

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let mut builder = Server::builder().config(cfg);
            if let Some(port) = port {
                builder = builder.port(port);
            }
            builder.build().await?.run().await
        },
        Command::Render { out } => {
            let html = AppState::from_config(cfg).await?.render().await;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, html)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Page rendered");
                },
                None => println!("{html}"),
            }
            Ok(())
        },
    }
}
