//! # Guide Rendering
//!
//! Configuration-driven populators for the guide page. Each populator takes a fragment of
//! the [`PageConfig`] and rewrites one region of the host markup.
//!
//! ## Contract
//!
//! * **Optional targets**: a missing element means the region is not used on this page;
//!   the populator returns without touching anything.
//! * **Idempotent**: applying the same fragment twice yields the same document.
//! * **Absent fragments**: [`apply`] only calls a populator when its fragment is present,
//!   so static markup survives. The footer is the exception and is always rendered.
//!
//! ## Trusted markup
//!
//! Explanation blocks, example cards, routine steps, the routine tip and tab panel contents
//! are inserted as raw HTML, exactly as authored. Keywords, titles and labels are text.

pub mod audio;
pub mod examples;
pub mod explain;
pub mod footer;
pub mod hero;
pub mod keywords;
pub mod meta;
pub mod routine;
pub mod tabs;
pub mod template;
mod util;

use mguide_dom::Document;
use mguide_domain::constants::DEFAULT_EXPLAIN_TITLE;
use mguide_domain::page::PageConfig;
use tracing::debug;

/// Runs every populator whose fragment is present, in page order.
pub fn apply(doc: &mut Document, cfg: &PageConfig) {
    if let Some(meta) = &cfg.meta {
        meta::apply(doc, meta);
    }
    if let Some(brand) = &cfg.brand {
        hero::apply_brand(doc, brand);
    }
    if let Some(meta) = &cfg.meta {
        meta::apply_headline(doc, meta);
    }
    if let Some(hero) = &cfg.hero {
        hero::apply(doc, hero);
    }
    if let Some(list) = &cfg.keywords {
        keywords::render(doc, list);
    }
    if let Some(explain) = &cfg.explain
        && let Some(blocks) = &explain.blocks
    {
        let title = util::present(explain.title.as_deref()).unwrap_or(DEFAULT_EXPLAIN_TITLE);
        explain::render(doc, blocks, title);
    }
    if let Some(tabs) = &cfg.tabs {
        tabs::render(doc, tabs);
    }
    if let Some(items) = cfg.examples.as_ref().and_then(|e| e.items.as_ref()) {
        examples::render(doc, items);
    }
    if let Some(routine) = &cfg.routine {
        routine::render(doc, routine);
    }
    if let Some(audio) = &cfg.audio {
        audio::apply(doc, audio);
    }
    footer::render(doc, cfg.legal.as_ref());

    debug!(empty = cfg.is_empty(), "Page config applied");
}
