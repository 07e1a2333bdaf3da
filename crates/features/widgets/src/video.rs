use mguide_dom::{Document, NodeId, Selector};
use mguide_domain::constants::{
    LITE_IFRAME_CLASS, LITE_VIDEO_CLASS, VIDEO_EMBED_BASE, VIDEO_EMBED_QUERY, VIDEO_ID_ATTR,
    VIDEO_IFRAME_ALLOW, VIDEO_IFRAME_TITLE,
};
use std::collections::HashSet;
use tracing::debug;

/// Player URL for a video identifier.
pub fn embed_url(video_id: &str) -> String {
    format!("{VIDEO_EMBED_BASE}{video_id}?{VIDEO_EMBED_QUERY}")
}

/// Click-to-load video placeholders. Each placeholder loads its player at most once.
#[derive(Debug, Default)]
pub struct LazyVideos {
    armed: HashSet<NodeId>,
}

impl LazyVideos {
    /// Arms every `.lite-video[data-yt]` currently in `doc`.
    pub fn arm(doc: &Document) -> Self {
        let armed: HashSet<NodeId> = doc
            .query_all(&Selector::class(LITE_VIDEO_CLASS).with_attr(VIDEO_ID_ATTR))
            .into_iter()
            .collect();
        debug!(placeholders = armed.len(), "Lazy videos armed");
        Self { armed }
    }

    pub fn is_armed(&self, placeholder: NodeId) -> bool {
        self.armed.contains(&placeholder)
    }

    /// Handles a click at `clicked`. Returns the placeholder whose player was loaded.
    ///
    /// The placeholder's contents become a single `iframe.lite-iframe`. A placeholder with
    /// an empty identifier does nothing and stays armed.
    pub fn on_click(&mut self, doc: &mut Document, clicked: NodeId) -> Option<NodeId> {
        let placeholder = doc
            .closest(clicked, &Selector::class(LITE_VIDEO_CLASS))
            .filter(|p| self.armed.contains(p))?;
        let video_id = doc.attr(placeholder, VIDEO_ID_ATTR).unwrap_or_default().trim().to_owned();
        if video_id.is_empty() {
            return None;
        }

        let iframe = doc.create_element("iframe");
        doc.add_class(iframe, LITE_IFRAME_CLASS);
        doc.set_attr(iframe, "title", VIDEO_IFRAME_TITLE);
        doc.set_attr(iframe, "allow", VIDEO_IFRAME_ALLOW);
        doc.set_attr(iframe, "allowfullscreen", "");
        doc.set_attr(iframe, "loading", "lazy");
        doc.set_attr(iframe, "referrerpolicy", "strict-origin-when-cross-origin");
        doc.set_attr(iframe, "src", embed_url(&video_id));
        doc.replace_children(placeholder, iframe);

        self.armed.remove(&placeholder);
        debug!(video = %video_id, "Video player loaded");
        Some(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_shape() {
        assert_eq!(
            embed_url("dQw4"),
            "https://www.youtube-nocookie.com/embed/dQw4\
             ?autoplay=1&rel=0&modestbranding=1&playsinline=1"
        );
    }

    #[test]
    fn test_empty_identifier_stays_armed() {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.append_element(body, "button");
        doc.add_class(button, LITE_VIDEO_CLASS);
        doc.set_attr(button, VIDEO_ID_ATTR, "");

        let mut videos = LazyVideos::arm(&doc);
        assert!(videos.on_click(&mut doc, button).is_none());
        assert!(videos.is_armed(button));
        assert!(doc.query(&Selector::tag("iframe")).is_none());
    }
}
