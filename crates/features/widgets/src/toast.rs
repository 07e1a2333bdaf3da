use crate::SharedDocument;
use mguide_domain::constants::{TOAST_ID, TOAST_TTL, TOAST_VISIBLE_CLASS};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Transient status message in `#toast`.
///
/// Each call to [`Toast::show`] replaces the text and restarts the hide timer, so the
/// message disappears one TTL after the *latest* call.
#[derive(Debug)]
pub struct Toast {
    doc: SharedDocument,
    ttl: Duration,
    pending_hide: Option<JoinHandle<()>>,
}

impl Toast {
    pub fn new(doc: SharedDocument) -> Self {
        Self::with_ttl(doc, TOAST_TTL)
    }

    pub fn with_ttl(doc: SharedDocument, ttl: Duration) -> Self {
        Self { doc, ttl, pending_hide: None }
    }

    /// Shows `message`. A page without `#toast` ignores the call.
    pub fn show(&mut self, message: &str) {
        {
            let mut doc = self.doc.lock();
            let Some(node) = doc.get_element_by_id(TOAST_ID) else { return };
            doc.set_text(node, message);
            doc.add_class(node, TOAST_VISIBLE_CLASS);
        }
        trace!(message, "Toast shown");

        if let Some(previous) = self.pending_hide.take() {
            previous.abort();
        }
        let doc = Arc::clone(&self.doc);
        let ttl = self.ttl;
        self.pending_hide = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut doc = doc.lock();
            if let Some(node) = doc.get_element_by_id(TOAST_ID) {
                doc.remove_class(node, TOAST_VISIBLE_CLASS);
            }
        }));
    }

    pub fn is_visible(&self) -> bool {
        let doc = self.doc.lock();
        doc.get_element_by_id(TOAST_ID).is_some_and(|n| doc.has_class(n, TOAST_VISIBLE_CLASS))
    }

    /// Current message text, visible or not.
    pub fn message(&self) -> String {
        let doc = self.doc.lock();
        doc.get_element_by_id(TOAST_ID).map(|n| doc.text_content(n)).unwrap_or_default()
    }
}

impl Drop for Toast {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.abort();
        }
    }
}
