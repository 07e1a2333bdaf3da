//! Facade crate for guide pages.
//! Re-exports the shared crates and runs the page startup sequence.
//! Keep this crate thin: it should compose other crates, not implement page logic.
//!
//! ## Usage
//! - [`bootstrap`] for an interactive page (widgets mounted, timers running).
//! - [`render_page`] for server-side HTML with no timers.
//! - Enable the `server` feature to reach the shared HTTP endpoints.

pub use mguide_dom as dom;
pub use mguide_domain as domain;
pub use mguide_kernel as kernel;
pub use mguide_render as render;
pub use mguide_widgets as widgets;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use mguide_kernel::server::router::system_router;
    }
}

use mguide_dom::Document;
use mguide_domain::page::PageConfig;
use mguide_kernel::loader::{Fetch, load_page_config};
use mguide_render::footer;
use mguide_widgets::audio::MediaPlayer;
use mguide_widgets::{Page, share};
use tracing::info;

/// Footer defaults, configuration load and every populator, in startup order.
///
/// Returns the configuration that was applied.
pub async fn prepare<F: Fetch>(document: &mut Document, fetcher: &F) -> PageConfig {
    footer::fill_missing(document, footer::current_year());
    let cfg = load_page_config(fetcher, document).await;
    mguide_render::apply(document, &cfg);
    cfg
}

/// Builds the interactive page: [`prepare`], then mounts the widgets.
///
/// The audio control is mounted only when the configuration has an `audio` fragment.
/// Must run inside a tokio runtime; widget timers are spawned on it.
pub async fn bootstrap<F, M>(mut document: Document, fetcher: &F, media: M) -> Page<M>
where
    F: Fetch,
    M: MediaPlayer,
{
    let cfg = prepare(&mut document, fetcher).await;
    let page = Page::new(share(document));
    let page = match &cfg.audio {
        Some(audio) => page.with_audio(audio, media),
        None => page,
    };
    info!(audio = page.audio().is_some(), empty = cfg.is_empty(), "Page ready");
    page
}

/// Server-side rendering: [`prepare`] then serialize.
pub async fn render_page<F: Fetch>(mut document: Document, fetcher: &F) -> String {
    prepare(&mut document, fetcher).await;
    document.to_html()
}
