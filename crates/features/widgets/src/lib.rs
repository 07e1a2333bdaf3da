//! # Guide Widgets
//!
//! Interactive behaviour of a rendered guide page, driven headlessly. Widgets share one
//! [`Document`] behind a mutex and own their timers, so independent pages never interfere.
//!
//! * [`toast::Toast`]: transient status message.
//! * [`blink::Blinker`]: alternating idle label.
//! * [`audio::AudioToggle`]: play/pause control over a [`audio::MediaPlayer`].
//! * [`video::LazyVideos`]: click-to-load embedded players.
//! * [`accordion`], [`tabs`], [`scroll`]: stateless document rules.
//! * [`page::Page`]: routes [`page::Event`]s to all of the above.
//!
//! Timers are tokio tasks; every widget that owns one must be created inside a runtime.

pub mod accordion;
pub mod audio;
pub mod blink;
pub mod error;
pub mod page;
pub mod scroll;
pub mod tabs;
pub mod toast;
pub mod video;

pub use error::PlaybackError;
pub use page::{ClickOutcome, Event, Page};

use mguide_dom::Document;
use parking_lot::Mutex;
use std::sync::Arc;

/// Document handle shared between a page and its timers.
pub type SharedDocument = Arc<Mutex<Document>>;

/// Wraps `doc` for sharing.
pub fn share(doc: Document) -> SharedDocument {
    Arc::new(Mutex::new(doc))
}
