use crate::util::present;
use mguide_dom::Document;
use mguide_domain::constants::{
    AUDIO_ID, CTA_LABEL_ID, DEFAULT_AUDIO_TYPE, DEFAULT_CTA_ALT, DEFAULT_CTA_IDLE,
    DEFAULT_CTA_PLAYING, PLAY_BUTTON_ID,
};
use mguide_domain::page::Audio;

/// Call-to-action texts of the audio control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaLabels {
    /// Shown first while idle.
    pub idle: String,
    /// Alternates with `idle` while idle.
    pub alt: String,
    pub playing: String,
}

impl Default for CtaLabels {
    fn default() -> Self {
        Self {
            idle: DEFAULT_CTA_IDLE.to_owned(),
            alt: DEFAULT_CTA_ALT.to_owned(),
            playing: DEFAULT_CTA_PLAYING.to_owned(),
        }
    }
}

impl From<&Audio> for CtaLabels {
    fn from(audio: &Audio) -> Self {
        let pick =
            |value: Option<&str>, default: &str| present(value).unwrap_or(default).to_owned();
        Self {
            idle: pick(audio.cta_idle.as_deref(), DEFAULT_CTA_IDLE),
            alt: pick(audio.cta_alt.as_deref(), DEFAULT_CTA_ALT),
            playing: pick(audio.cta_playing.as_deref(), DEFAULT_CTA_PLAYING),
        }
    }
}

/// Replaces every `<source>` of `#audio` with the configured list.
pub fn render_sources(doc: &mut Document, audio: &Audio) {
    let Some(player) = doc.get_element_by_id(AUDIO_ID) else { return };
    doc.clear_children(player);
    for source in audio.resolved_sources(DEFAULT_AUDIO_TYPE) {
        let node = doc.append_element(player, "source");
        doc.set_attr(node, "src", source.src);
        doc.set_attr(node, "type", source.kind.unwrap_or_else(|| DEFAULT_AUDIO_TYPE.to_owned()));
    }
}

/// Rebuilds the sources and puts the control in its idle label, when the control exists.
pub fn apply(doc: &mut Document, audio: &Audio) {
    let (Some(_), Some(_), Some(label)) = (
        doc.get_element_by_id(AUDIO_ID),
        doc.get_element_by_id(PLAY_BUTTON_ID),
        doc.get_element_by_id(CTA_LABEL_ID),
    ) else {
        return;
    };
    render_sources(doc, audio);
    doc.set_text(label, CtaLabels::from(audio).idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mguide_dom::Selector;
    use mguide_domain::page::AudioSource;

    #[test]
    fn test_labels_fall_back_per_field() {
        let labels = CtaLabels::from(&Audio {
            cta_idle: Some("Escucha".to_owned()),
            cta_alt: Some(String::new()),
            ..Audio::default()
        });
        assert_eq!(labels.idle, "Escucha");
        assert_eq!(labels.alt, DEFAULT_CTA_ALT);
        assert_eq!(labels.playing, DEFAULT_CTA_PLAYING);
    }

    #[test]
    fn test_sources_are_rebuilt_in_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let player = doc.append_element(body, "audio");
        doc.set_attr(player, "id", AUDIO_ID);
        let stale = doc.append_element(player, "source");
        doc.set_attr(stale, "src", "stale.mp3");

        let audio = Audio {
            sources: Some(vec![
                AudioSource { src: "a.ogg".to_owned(), kind: Some("audio/ogg".to_owned()) },
                AudioSource { src: "a.mp3".to_owned(), kind: None },
            ]),
            ..Audio::default()
        };
        render_sources(&mut doc, &audio);

        let sources = doc.query_all_within(player, &Selector::tag("source"));
        let attrs: Vec<(Option<&str>, Option<&str>)> =
            sources.iter().map(|&s| (doc.attr(s, "src"), doc.attr(s, "type"))).collect();
        assert_eq!(
            attrs,
            [(Some("a.ogg"), Some("audio/ogg")), (Some("a.mp3"), Some(DEFAULT_AUDIO_TYPE))]
        );
    }
}
