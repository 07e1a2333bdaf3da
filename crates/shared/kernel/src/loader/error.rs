use std::borrow::Cow;

/// Why a configuration document could not be obtained.
///
/// These never reach the page: the loader logs them and falls back.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// Transport failure talking to a remote host.
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The remote host answered with a non-success status.
    #[error("Unexpected status{}: {message}", format_context(.context))]
    Status { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A local document could not be read.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The body is not a configuration document.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The reference cannot be turned into a fetchable location.
    #[error("Invalid location{}: {message}", format_context(.context))]
    InvalidLocation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<reqwest::Error> for LoaderError {
    fn from(source: reqwest::Error) -> Self {
        Self::Http { source, context: None }
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

impl From<crate::security::path::PathGuardError> for LoaderError {
    fn from(err: crate::security::path::PathGuardError) -> Self {
        Self::InvalidLocation { message: err.to_string().into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
