use crate::SharedDocument;
use mguide_dom::NodeId;
use mguide_domain::constants::BLINK_INTERVAL;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Alternates a label between two texts on a fixed period.
#[derive(Debug)]
pub struct Blinker {
    doc: SharedDocument,
    label: NodeId,
    texts: Arc<(String, String)>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Blinker {
    pub fn new(doc: SharedDocument, label: NodeId, first: String, second: String) -> Self {
        Self {
            doc,
            label,
            texts: Arc::new((first, second)),
            period: BLINK_INTERVAL,
            task: None,
        }
    }

    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Shows the first text now and alternates every period. Restarting cancels the
    /// previous cycle first, so at most one cycle ever runs.
    pub fn start(&mut self) {
        self.stop();
        self.doc.lock().set_text(self.label, self.texts.0.as_str());

        let doc = Arc::clone(&self.doc);
        let texts = Arc::clone(&self.texts);
        let label = self.label;
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut doc = doc.lock();
                let next = if doc.text_content(label) == texts.0 { &texts.1 } else { &texts.0 };
                doc.set_text(label, next.as_str());
            }
        }));
    }

    /// Stops alternating; the label keeps its current text.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub const fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for Blinker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share;
    use mguide_dom::Document;

    fn label_doc() -> (SharedDocument, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let label = doc.append_element(body, "span");
        (share(doc), label)
    }

    fn text(doc: &SharedDocument, node: NodeId) -> String {
        doc.lock().text_content(node)
    }

    #[tokio::test(start_paused = true)]
    async fn test_alternates_every_period() {
        let (doc, label) = label_doc();
        let mut blinker = Blinker::new(Arc::clone(&doc), label, "A".into(), "B".into());
        blinker.start();
        assert_eq!(text(&doc, label), "A");

        tokio::time::sleep(Duration::from_millis(1750)).await;
        assert_eq!(text(&doc, label), "B");
        tokio::time::sleep(Duration::from_millis(1700)).await;
        assert_eq!(text(&doc, label), "A");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_label() {
        let (doc, label) = label_doc();
        let mut blinker = Blinker::new(Arc::clone(&doc), label, "A".into(), "B".into());
        blinker.start();
        blinker.stop();
        doc.lock().set_text(label, "Pausar");

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(text(&doc, label), "Pausar");
        assert!(!blinker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_keeps_single_cycle() {
        let (doc, label) = label_doc();
        let mut blinker = Blinker::new(Arc::clone(&doc), label, "A".into(), "B".into());
        blinker.start();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        blinker.start();

        // A leaked first cycle would flip the label back at 1700ms.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(text(&doc, label), "A");
        tokio::time::sleep(Duration::from_millis(750)).await;
        assert_eq!(text(&doc, label), "B");
    }
}
