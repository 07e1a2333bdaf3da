use super::LoaderError;
use crate::security::path::PathGuard;
use mguide_domain::config::PageSettings;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Retrieves the raw text of a configuration document.
///
/// The loader owns the fallback policy; implementations only report what went wrong.
pub trait Fetch: Send + Sync {
    fn fetch(&self, location: &str) -> impl Future<Output = Result<String, LoaderError>> + Send;
}

/// Where a reference ends up after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Remote(Url),
    Local(PathBuf),
}

/// Default [`Fetch`] implementation.
///
/// * Absolute `http(s)` URLs are fetched remotely, bypassing caches.
/// * Relative references are joined onto the base URL when one is configured,
///   otherwise read from the local root directory.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
    base: Option<Url>,
    root: PathBuf,
}

impl SourceFetcher {
    pub fn builder() -> SourceFetcherBuilder {
        SourceFetcherBuilder::default()
    }

    /// Builds a fetcher from the `[page]` settings.
    ///
    /// # Errors
    /// Returns [`LoaderError::InvalidLocation`] when `base_url` does not parse.
    pub fn from_settings(settings: &PageSettings) -> Result<Self, LoaderError> {
        let mut builder = Self::builder().root(&settings.assets_dir);
        if let Some(base) = &settings.base_url {
            builder = builder.base_url(base);
        }
        builder.build()
    }

    /// Maps a reference onto a remote URL or a sandboxed local path.
    ///
    /// # Errors
    /// Rejects non-HTTP schemes and local references that leave the root.
    pub fn resolve(&self, location: &str) -> Result<Resolved, LoaderError> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Resolved::Remote(url)),
            Ok(url) => Err(LoaderError::InvalidLocation {
                message: format!("unsupported scheme '{}'", url.scheme()).into(),
                context: Some(location.to_owned().into()),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base {
                Some(base) => base.join(location).map(Resolved::Remote).map_err(|e| {
                    LoaderError::InvalidLocation {
                        message: e.to_string().into(),
                        context: Some(location.to_owned().into()),
                    }
                }),
                None => Ok(Resolved::Local(PathGuard::resolve(&self.root, location)?)),
            },
            Err(e) => Err(LoaderError::InvalidLocation {
                message: e.to_string().into(),
                context: Some(location.to_owned().into()),
            }),
        }
    }

    async fn get(&self, url: Url) -> Result<String, LoaderError> {
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|source| LoaderError::Http { source, context: Some(url.to_string().into()) })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::Status {
                message: format!("HTTP {}", status.as_u16()).into(),
                context: Some(url.to_string().into()),
            });
        }
        Ok(response.text().await?)
    }
}

impl Fetch for SourceFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoaderError> {
        match self.resolve(location)? {
            Resolved::Remote(url) => {
                debug!(%url, "Fetching remote page config");
                self.get(url).await
            },
            Resolved::Local(path) => {
                debug!(path = %path.display(), "Reading local page config");
                tokio::fs::read_to_string(&path).await.map_err(|source| LoaderError::Io {
                    source,
                    context: Some(path.display().to_string().into()),
                })
            },
        }
    }
}

#[derive(Debug, Default)]
#[must_use = "builders do nothing unless you call .build()"]
pub struct SourceFetcherBuilder {
    root: Option<PathBuf>,
    base_url: Option<String>,
    client: Option<reqwest::Client>,
}

impl SourceFetcherBuilder {
    /// Directory for relative references when no base URL is set. Defaults to `.`.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Reuses an existing HTTP client.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// # Errors
    /// Returns [`LoaderError::InvalidLocation`] when the base URL does not parse.
    pub fn build(self) -> Result<SourceFetcher, LoaderError> {
        let base = self
            .base_url
            .map(|raw| {
                Url::parse(&raw).map_err(|e| LoaderError::InvalidLocation {
                    message: e.to_string().into(),
                    context: Some(format!("base url '{raw}'").into()),
                })
            })
            .transpose()?;

        Ok(SourceFetcher {
            client: self.client.unwrap_or_default(),
            base,
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_base_reads_local() {
        let fetcher = SourceFetcher::builder().root("public").build().unwrap();
        assert_eq!(
            fetcher.resolve("guide.json").unwrap(),
            Resolved::Local(PathBuf::from("public/guide.json"))
        );
        assert!(fetcher.resolve("../guide.json").is_err());
    }

    #[test]
    fn test_resolve_with_base_joins_remote() {
        let fetcher =
            SourceFetcher::builder().base_url("https://cdn.example.org/guias/").build().unwrap();
        assert_eq!(
            fetcher.resolve("ritmo.json").unwrap(),
            Resolved::Remote(Url::parse("https://cdn.example.org/guias/ritmo.json").unwrap())
        );
    }

    #[test]
    fn test_resolve_absolute_and_foreign_schemes() {
        let fetcher = SourceFetcher::builder().build().unwrap();
        assert!(matches!(
            fetcher.resolve("http://localhost:9/a.json").unwrap(),
            Resolved::Remote(_)
        ));
        assert!(fetcher.resolve("file:///etc/passwd").is_err());
        assert!(fetcher.resolve("ftp://example.org/a.json").is_err());
    }

    #[test]
    fn test_invalid_base_url_fails_build() {
        assert!(SourceFetcher::builder().base_url("not a url").build().is_err());
    }
}
