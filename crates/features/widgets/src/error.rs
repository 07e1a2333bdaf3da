use std::borrow::Cow;

/// Reasons a media element refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Autoplay policy or user settings block playback.
    #[error("Playback not allowed{}: {message}", format_context(.context))]
    NotAllowed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Nothing playable is loaded.
    #[error("No playable source{}: {message}", format_context(.context))]
    NoSource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
