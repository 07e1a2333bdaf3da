//! Optional page configuration loading.
//!
//! The host markup declares the document in `#app[data-config]` and may embed a copy in
//! `script#APP_FALLBACK_JSON`. Loading never fails:
//!
//! 1. No declared location: empty configuration.
//! 2. Fetch, then decode. Any failure is logged and the embedded copy is used instead.
//! 3. An embedded copy that does not decode yields the empty configuration.

mod error;
mod fetch;

pub use error::LoaderError;
pub use fetch::{Fetch, Resolved, SourceFetcher, SourceFetcherBuilder};

use mguide_dom::Document;
use mguide_domain::constants::{APP_ID, FALLBACK_JSON_ID};
use mguide_domain::page::PageConfig;
use tracing::{debug, info, warn};

/// Location declared by the host markup, if any.
pub fn declared_location(doc: &Document) -> Option<String> {
    let app = doc.get_element_by_id(APP_ID)?;
    doc.attr(app, "data-config").map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Decodes a configuration document. Only JSON objects are accepted.
///
/// # Errors
/// Returns [`LoaderError::Decode`] for malformed JSON, non-object roots, or fields
/// of the wrong shape.
pub fn parse_page_config(raw: &str) -> Result<PageConfig, LoaderError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(LoaderError::Decode {
            source: serde::de::Error::custom("configuration root must be a JSON object"),
            context: None,
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Configuration embedded in the host markup; empty when absent or unreadable.
pub fn embedded_fallback(doc: &Document) -> PageConfig {
    let raw = doc
        .get_element_by_id(FALLBACK_JSON_ID)
        .map(|node| doc.text_content(node))
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "{}".to_owned());

    parse_page_config(&raw).unwrap_or_else(|e| {
        debug!(error = %e, "Embedded fallback is not a usable config");
        PageConfig::default()
    })
}

/// Loads the page configuration declared by `doc`.
pub async fn load_page_config<F: Fetch>(fetcher: &F, doc: &Document) -> PageConfig {
    let Some(location) = declared_location(doc) else {
        debug!("No data-config declared, keeping static markup");
        return PageConfig::default();
    };

    let fetched = match fetcher.fetch(&location).await {
        Ok(raw) => parse_page_config(&raw),
        Err(e) => Err(e),
    };

    match fetched {
        Ok(cfg) => {
            info!(%location, "Page config loaded");
            cfg
        },
        Err(e) => {
            warn!(%location, error = %e, "Page config fetch failed, using embedded fallback");
            embedded_fallback(doc)
        },
    }
}
