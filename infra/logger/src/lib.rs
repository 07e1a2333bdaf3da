//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for guide services.
//!
//! * Console output is a compact, ANSI-coloured formatter.
//! * File output rotates daily through `tracing-appender` and is written on a
//!   background worker; keep the returned [`Logger`] alive so it can flush.
//! * The default directive (e.g. `"info"` or `"mguide=debug,tower_http=info"`) is a
//!   programmatic fallback; `RUST_LOG` still takes precedence.
//!
//! ## Example
//!
//! ```rust
//! use mguide_logger::Logger;
//!
//! let _logger = Logger::builder("guide").directive("debug").init().unwrap();
//! tracing::debug!("ready");
//! ```

mod error;

pub use crate::error::LoggerError;

use mguide_domain::config::LogSettings;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_DIRECTIVE: &str = "info";
const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Fluent configuration for [`Logger`].
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    directive: String,
    console: bool,
    directory: Option<PathBuf>,
    json: bool,
    max_files: usize,
}

impl LoggerBuilder {
    /// Default filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Enables rolling files named `<name>.<date>.log` under `directory`.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Writes file output as JSON lines. Console output is unaffected.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a bad directive,
    ///   `max_files == 0` or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let filter = EnvFilter::builder()
            .parse(&self.directive)
            .map_err(|e| invalid(format!("bad directive '{}': {e}", self.directive)))?;
        let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(env) if !env.trim().is_empty() => EnvFilter::new(env),
            _ => filter,
        };

        let mut layers = Vec::new();
        if self.console {
            let console = fmt::layer().compact().with_writer(std::io::stderr).with_ansi(true);
            layers.push(console.boxed());
        }

        let guard = match &self.directory {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("creating {}", dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, file = self.directory.is_some(), "Logger installed");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("logger name cannot be empty"));
        }
        if self.max_files == 0 {
            return Err(invalid("max_files must be greater than zero"));
        }
        if !self.console && self.directory.is_none() {
            return Err(invalid("no output enabled; enable the console or set a directory"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// Handle to the installed subscriber.
///
/// Holds the file writer's worker guard; dropping it flushes and stops file logging.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            directive: DEFAULT_DIRECTIVE.to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Installs the subscriber described by the application's `[log]` settings.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`].
    pub fn from_settings(
        name: impl Into<String>,
        settings: &LogSettings,
    ) -> Result<Self, LoggerError> {
        let mut builder = Self::builder(name).directive(&settings.level).json(settings.json);
        if let Some(dir) = &settings.directory {
            builder = builder.directory(dir);
        }
        builder.init()
    }

    /// `true` when a file writer is attached.
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}
