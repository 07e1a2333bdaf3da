use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;

/// Name of the settings file looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "guide";
/// Prefix of environment overrides (`MGUIDE__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "MGUIDE";

/// Errors raised while assembling settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

trait ConfigResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: &'static str) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Loads settings from an optional file layered under environment overrides.
///
/// 1. **File**: an explicit `path` must exist; without one, `guide.{toml,json,yaml}` in the
///    working directory is used when present. The format follows the extension.
/// 2. **Environment**: variables prefixed with `MGUIDE__`, nested with `__`
///    (`MGUIDE__PAGE__CONFIG_URL` maps to `page.config_url`).
///
/// Missing keys fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing or any source fails to
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use mguide_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// # let _ = cfg.port;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => File::from(p.as_ref()).required(true),
        None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
    };

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")
}
