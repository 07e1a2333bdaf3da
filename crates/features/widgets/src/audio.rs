use crate::SharedDocument;
use crate::blink::Blinker;
use crate::error::PlaybackError;
use crate::toast::Toast;
use mguide_dom::NodeId;
use mguide_domain::constants::{
    AUDIO_ID, CTA_LABEL_ID, DEFAULT_AUDIO_TYPE, MSG_AUDIO_BLOCKED, MSG_AUDIO_PAUSED,
    MSG_AUDIO_PLAYING, PLAY_BUTTON_ID,
};
use mguide_domain::page::{Audio, AudioSource};
use mguide_render::audio::CtaLabels;
use std::sync::Arc;
use tracing::{debug, error, info};

/// The media element behind the audio control.
pub trait MediaPlayer: Send {
    /// Replaces the playable sources.
    fn load(&mut self, sources: &[AudioSource]);

    /// Starts playback. May be refused.
    fn play(&mut self) -> impl Future<Output = Result<(), PlaybackError>> + Send;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;
}

/// In-memory media element with a configurable autoplay policy.
#[derive(Debug, Clone)]
pub struct HeadlessMedia {
    sources: Vec<AudioSource>,
    paused: bool,
    autoplay_allowed: bool,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self { sources: Vec::new(), paused: true, autoplay_allowed: true }
    }
}

impl HeadlessMedia {
    /// A media element whose `play` is always refused.
    pub fn blocked() -> Self {
        Self { autoplay_allowed: false, ..Self::default() }
    }

    pub fn set_autoplay_allowed(&mut self, allowed: bool) {
        self.autoplay_allowed = allowed;
    }

    pub fn sources(&self) -> &[AudioSource] {
        &self.sources
    }

    /// Simulates reaching the end of the track.
    pub fn finish(&mut self) {
        self.paused = true;
    }
}

impl MediaPlayer for HeadlessMedia {
    fn load(&mut self, sources: &[AudioSource]) {
        self.sources = sources.to_vec();
        self.paused = true;
    }

    async fn play(&mut self) -> Result<(), PlaybackError> {
        if self.sources.is_empty() {
            return Err(PlaybackError::NoSource {
                message: "no <source> loaded".into(),
                context: None,
            });
        }
        if !self.autoplay_allowed {
            return Err(PlaybackError::NotAllowed {
                message: "the user agent refused to start playback".into(),
                context: Some("autoplay policy".into()),
            });
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// The play/pause call to action.
///
/// Idle: `aria-pressed="false"` and the label blinks between the idle texts.
/// Playing: `aria-pressed="true"` and the label reads the playing text. The state is read
/// from the media element, never tracked separately.
#[derive(Debug)]
pub struct AudioToggle<M> {
    doc: SharedDocument,
    media: M,
    button: NodeId,
    label: NodeId,
    labels: CtaLabels,
    blinker: Blinker,
}

impl<M: MediaPlayer> AudioToggle<M> {
    /// Loads the configured sources into `media` and starts the idle blink.
    ///
    /// Returns `None` when the page lacks `#audio`, `#btnPlay` or `#ctaLabel`.
    pub fn mount(doc: SharedDocument, audio: &Audio, mut media: M) -> Option<Self> {
        let (button, label) = {
            let d = doc.lock();
            d.get_element_by_id(AUDIO_ID)?;
            (d.get_element_by_id(PLAY_BUTTON_ID)?, d.get_element_by_id(CTA_LABEL_ID)?)
        };

        let sources = audio.resolved_sources(DEFAULT_AUDIO_TYPE);
        media.load(&sources);
        debug!(sources = sources.len(), "Audio control mounted");

        let labels = CtaLabels::from(audio);
        let mut blinker =
            Blinker::new(Arc::clone(&doc), label, labels.idle.clone(), labels.alt.clone());
        blinker.start();

        Some(Self { doc, media, button, label, labels, blinker })
    }

    pub fn is_playing(&self) -> bool {
        !self.media.is_paused()
    }

    pub const fn labels(&self) -> &CtaLabels {
        &self.labels
    }

    pub const fn media(&self) -> &M {
        &self.media
    }

    pub const fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Toggles playback. A refused `play` leaves the control as it was.
    pub async fn on_click(&mut self, toast: &mut Toast) {
        if !self.media.is_paused() {
            self.media.pause();
            self.enter_idle();
            toast.show(MSG_AUDIO_PAUSED);
            info!("Audio paused");
            return;
        }

        match self.media.play().await {
            Ok(()) => {
                self.blinker.stop();
                {
                    let mut doc = self.doc.lock();
                    doc.set_attr(self.button, "aria-pressed", "true");
                    doc.set_text(self.label, self.labels.playing.as_str());
                }
                toast.show(MSG_AUDIO_PLAYING);
                info!("Audio playing");
            },
            Err(e) => {
                error!(error = %e, "Audio playback failed");
                toast.show(MSG_AUDIO_BLOCKED);
            },
        }
    }

    /// Playback reached the end of the track.
    pub fn on_ended(&mut self) {
        self.enter_idle();
    }

    /// The page is going away; stop sound without touching the label.
    pub fn on_page_hide(&mut self) {
        if !self.media.is_paused() {
            self.media.pause();
        }
    }

    fn enter_idle(&mut self) {
        self.doc.lock().set_attr(self.button, "aria-pressed", "false");
        self.blinker.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_headless_media_requires_sources() {
        let mut media = HeadlessMedia::default();
        assert!(matches!(media.play().await, Err(PlaybackError::NoSource { .. })));

        media.load(&[AudioSource { src: "a.mp3".into(), kind: None }]);
        assert!(media.play().await.is_ok());
        assert!(!media.is_paused());
    }

    #[tokio::test]
    async fn test_blocked_media_refuses_play() {
        let mut media = HeadlessMedia::blocked();
        media.load(&[AudioSource { src: "a.mp3".into(), kind: None }]);
        let err = media.play().await.unwrap_err();
        assert!(err.to_string().contains("autoplay policy"));
        assert!(media.is_paused());
    }
}
