use crate::SharedDocument;
use crate::accordion;
use crate::audio::{AudioToggle, MediaPlayer};
use crate::scroll::{self, ScrollRequest};
use crate::tabs;
use crate::toast::Toast;
use crate::video::LazyVideos;
use mguide_dom::{NodeId, Selector};
use mguide_domain::constants::{MSG_VIDEO_PLAYING, PLAY_BUTTON_ID, TAB_CLASS};
use mguide_domain::page::Audio;
use std::sync::Arc;
use tracing::{debug, warn};

/// Input delivered to a mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A click whose innermost target is the node.
    Click(NodeId),
    /// A `<details>` changed its open state.
    Toggle(NodeId),
    PageHide,
    /// The audio track played to the end.
    MediaEnded,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Suppress the default action (link navigation).
    pub default_prevented: bool,
    pub scroll: Option<ScrollRequest>,
}

/// A rendered guide with its widgets mounted.
#[derive(Debug)]
pub struct Page<M> {
    doc: SharedDocument,
    toast: Toast,
    audio: Option<AudioToggle<M>>,
    videos: LazyVideos,
}

impl<M: MediaPlayer> Page<M> {
    /// Mounts the toast, lazy videos and the document-wide rules.
    pub fn new(doc: SharedDocument) -> Self {
        let videos = LazyVideos::arm(&doc.lock());
        let toast = Toast::new(Arc::clone(&doc));
        Self { doc, toast, audio: None, videos }
    }

    /// Mounts the audio control. Pages without the control markup stay silent.
    #[must_use]
    pub fn with_audio(mut self, audio: &Audio, media: M) -> Self {
        self.audio = AudioToggle::mount(Arc::clone(&self.doc), audio, media);
        if self.audio.is_none() {
            warn!("Audio configured but the page has no audio control");
        }
        self
    }

    pub fn document(&self) -> SharedDocument {
        Arc::clone(&self.doc)
    }

    pub const fn toast(&self) -> &Toast {
        &self.toast
    }

    pub const fn audio(&self) -> Option<&AudioToggle<M>> {
        self.audio.as_ref()
    }

    pub const fn audio_mut(&mut self) -> Option<&mut AudioToggle<M>> {
        self.audio.as_mut()
    }

    pub const fn videos(&self) -> &LazyVideos {
        &self.videos
    }

    /// Shows a transient message.
    pub fn flash(&mut self, message: &str) {
        self.toast.show(message);
    }

    pub async fn dispatch(&mut self, event: Event) -> ClickOutcome {
        match event {
            Event::Click(target) => return self.on_click(target).await,
            Event::Toggle(node) => accordion::on_toggle(&mut self.doc.lock(), node),
            Event::PageHide => {
                if let Some(audio) = self.audio.as_mut() {
                    audio.on_page_hide();
                }
            },
            Event::MediaEnded => {
                if let Some(audio) = self.audio.as_mut() {
                    audio.on_ended();
                }
            },
        }
        ClickOutcome::default()
    }

    async fn on_click(&mut self, target: NodeId) -> ClickOutcome {
        let jump = scroll::intercept(&self.doc.lock(), target);
        if let Some(request) = jump {
            debug!(target = ?request.target, "In-page link intercepted");
            return ClickOutcome { default_prevented: true, scroll: Some(request) };
        }

        let on_play = self.doc.lock().closest(target, &Selector::id(PLAY_BUTTON_ID)).is_some();
        if on_play {
            if let Some(audio) = self.audio.as_mut() {
                audio.on_click(&mut self.toast).await;
            }
            return ClickOutcome::default();
        }

        {
            let mut doc = self.doc.lock();
            if let Some(tab) = doc.closest(target, &Selector::class(TAB_CLASS))
                && tabs::select(&mut doc, tab)
            {
                return ClickOutcome::default();
            }
        }

        let loaded = self.videos.on_click(&mut self.doc.lock(), target);
        if loaded.is_some() {
            self.toast.show(MSG_VIDEO_PLAYING);
            return ClickOutcome::default();
        }

        let mut doc = self.doc.lock();
        if let Some(summary) = doc.closest(target, &Selector::tag("summary"))
            && let Some(details) = doc.parent(summary).filter(|&p| doc.tag(p) == Some("details"))
        {
            accordion::toggle(&mut doc, details);
        }
        ClickOutcome::default()
    }
}
