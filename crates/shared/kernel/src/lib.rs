//! Kernel utilities shared by the facade and the server.
//! Keep this crate lightweight: settings loading, the page configuration loader and the
//! sandboxing helpers it relies on.
//!
//! ## Settings loading (non-wasm)
//! ```rust,ignore
//! use mguide_kernel::config::load_config;
//! use mguide_domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("guide.toml")).unwrap_or_default();
//! ```
//!
//! ## Page configuration
//! ```rust,ignore
//! use mguide_kernel::loader::{SourceFetcher, load_page_config};
//!
//! let fetcher = SourceFetcher::builder().root("public").build()?;
//! let page = load_page_config(&fetcher, &document).await; // never fails
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod loader;
pub mod security;
#[cfg(feature = "server")]
pub mod server;

pub use mguide_domain as domain;
