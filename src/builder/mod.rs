//! Fluent construction of a [`DeclarativeConfig`].
//!
//! Hand-writing handler/formatter/logger maps means knowing every schema key;
//! the builder hides that behind setters and merges environment overrides at
//! `build()` time. Setters only record intent, so building twice against the
//! same environment yields equal artifacts.

mod assemble;
mod framework;

pub use framework::{DEFAULT_FRAMEWORK_LOGGER, DEFAULT_SQL_LOGGER, FrameworkLogConfigBuilder};

use crate::config::{ConsoleStream, DeclarativeConfig, FilterSpec, Settings};
use crate::env::{Environment, ProcessEnv};
use crate::error::Error;
use crate::level::LevelToken;
use crate::runtime::Initializer;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default rotation threshold in megabytes.
pub const DEFAULT_MAX_SIZE_MB: i64 = 10;
/// Default number of rotated backups kept.
pub const DEFAULT_MAX_COUNT: i64 = 5;

/// How one sink renders entries. The last setter called wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkFormat {
    Text,
    Json,
    /// Literal `%(attr)s` pattern.
    Pattern(String),
    /// Name of a renderer registered with the `Initializer`.
    Renderer(String),
}

/// Rotation threshold as the caller expressed it; converted to bytes at build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxSize {
    Megabytes(i64),
    Bytes(i64),
}

/// Enablement and rendering for one sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkState {
    pub enabled: bool,
    pub format: SinkFormat,
}

/// Everything the fluent setters record. Nothing is resolved until build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderState {
    pub console: SinkState,
    pub console_stream: ConsoleStream,
    pub file: SinkState,
    /// `None` means `<app>-<host>.log` in the working directory.
    pub file_path: Option<PathBuf>,
    pub file_max_size: MaxSize,
    pub file_max_count: i64,
    /// Wins over `L4PY_LOG_LEVEL_ROOT`; `None` defers to it, then INFO.
    pub root_level: Option<LevelToken>,
    pub loggers: BTreeMap<String, LevelToken>,
    /// Attached to root and to every logger entry.
    pub filters: BTreeMap<String, FilterSpec>,
    pub timestamp_format: Option<String>,
    pub utc: bool,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self {
            console: SinkState {
                enabled: true,
                format: SinkFormat::Text,
            },
            console_stream: ConsoleStream::Stderr,
            file: SinkState {
                enabled: true,
                format: SinkFormat::Json,
            },
            file_path: None,
            file_max_size: MaxSize::Megabytes(DEFAULT_MAX_SIZE_MB),
            file_max_count: DEFAULT_MAX_COUNT,
            root_level: None,
            loggers: BTreeMap::new(),
            filters: BTreeMap::new(),
            timestamp_format: None,
            utc: false,
        }
    }
}

impl BuilderState {
    /// State seeded from a settings file.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let sink_format = |json: bool, format: Option<&String>| match format {
            Some(pattern) => SinkFormat::Pattern(pattern.clone()),
            None if json => SinkFormat::Json,
            None => SinkFormat::Text,
        };

        Self {
            console: SinkState {
                enabled: settings.console.enabled,
                format: sink_format(settings.console.json, settings.console.format.as_ref()),
            },
            console_stream: settings.console.stream,
            file: SinkState {
                enabled: settings.file.enabled,
                format: sink_format(settings.file.json, settings.file.format.as_ref()),
            },
            file_path: settings.file.path.as_ref().map(PathBuf::from),
            file_max_size: MaxSize::Megabytes(settings.file.max_size_mb),
            file_max_count: settings.file.max_count,
            root_level: settings.levels.root.clone(),
            loggers: settings.levels.loggers.clone(),
            timestamp_format: settings.timestamp.format.clone(),
            utc: settings.timestamp.utc,
            ..Self::default()
        }
    }
}

/// Shared fluent surface of every config builder.
///
/// Implementors expose their [`BuilderState`] and decide how the final
/// artifact is assembled; every setter is provided.
pub trait LoggingBuilder: Sized {
    fn state(&self) -> &BuilderState;

    fn state_mut(&mut self) -> &mut BuilderState;

    /// Assembles the artifact against an explicit environment.
    ///
    /// # Errors
    /// Invalid level tokens, negative or overflowing rotation values, invalid
    /// patterns, or dangling references in the result.
    fn build_with(&self, env: &dyn Environment) -> Result<DeclarativeConfig, Error>;

    /// Assembles the artifact against the process environment.
    ///
    /// # Errors
    /// See [`LoggingBuilder::build_with`].
    fn build(&self) -> Result<DeclarativeConfig, Error> {
        self.build_with(&ProcessEnv)
    }

    /// Builds and installs the result as the active configuration.
    ///
    /// # Errors
    /// Any build error; nothing is installed in that case.
    fn init(&self) -> Result<(), Error> {
        let config = self.build()?;
        Initializer::new().install(&config).map(drop)
    }

    #[must_use]
    fn console_enabled(mut self, enabled: bool) -> Self {
        self.state_mut().console.enabled = enabled;
        self
    }

    /// JSON when `true`, text when `false`.
    #[must_use]
    fn console_json(mut self, json: bool) -> Self {
        self.state_mut().console.format = if json {
            SinkFormat::Json
        } else {
            SinkFormat::Text
        };
        self
    }

    #[must_use]
    fn console_format(mut self, pattern: impl Into<String>) -> Self {
        self.state_mut().console.format = SinkFormat::Pattern(pattern.into());
        self
    }

    #[must_use]
    fn console_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.state_mut().console.format = SinkFormat::Renderer(renderer.into());
        self
    }

    #[must_use]
    fn console_stream(mut self, stream: ConsoleStream) -> Self {
        self.state_mut().console_stream = stream;
        self
    }

    #[must_use]
    fn file_enabled(mut self, enabled: bool) -> Self {
        self.state_mut().file.enabled = enabled;
        self
    }

    #[must_use]
    fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_mut().file_path = Some(path.into());
        self
    }

    /// JSON when `true`, text when `false`.
    #[must_use]
    fn file_json(mut self, json: bool) -> Self {
        self.state_mut().file.format = if json {
            SinkFormat::Json
        } else {
            SinkFormat::Text
        };
        self
    }

    #[must_use]
    fn file_format(mut self, pattern: impl Into<String>) -> Self {
        self.state_mut().file.format = SinkFormat::Pattern(pattern.into());
        self
    }

    #[must_use]
    fn file_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.state_mut().file.format = SinkFormat::Renderer(renderer.into());
        self
    }

    /// Rotation threshold in megabytes. Zero disables rotation.
    #[must_use]
    fn file_max_size_mb(mut self, megabytes: i64) -> Self {
        self.state_mut().file_max_size = MaxSize::Megabytes(megabytes);
        self
    }

    /// Rotation threshold in bytes. Zero disables rotation.
    #[must_use]
    fn file_max_bytes(mut self, bytes: i64) -> Self {
        self.state_mut().file_max_size = MaxSize::Bytes(bytes);
        self
    }

    /// Rotated backups kept. Zero disables rotation.
    #[must_use]
    fn file_max_count(mut self, count: i64) -> Self {
        self.state_mut().file_max_count = count;
        self
    }

    /// strftime pattern for timestamps, with optional UTC rendering.
    #[must_use]
    fn timestamp_format(mut self, pattern: impl Into<String>, utc: bool) -> Self {
        let state = self.state_mut();
        state.timestamp_format = Some(pattern.into());
        state.utc = utc;
        self
    }

    /// Named filter applied by root and every configured logger.
    #[must_use]
    fn add_filter(mut self, name: impl Into<String>, filter: FilterSpec) -> Self {
        self.state_mut().filters.insert(name.into(), filter);
        self
    }

    /// Explicit level for a named logger. Environment overrides still win.
    #[must_use]
    fn add_logger(mut self, name: impl Into<String>, level: impl Into<LevelToken>) -> Self {
        self.state_mut().loggers.insert(name.into(), level.into());
        self
    }

    /// Explicit root level. Wins over `L4PY_LOG_LEVEL_ROOT`, unlike named loggers.
    #[must_use]
    fn add_root_logger(mut self, level: impl Into<LevelToken>) -> Self {
        self.state_mut().root_level = Some(level.into());
        self
    }
}

/// General-purpose builder: console and rotating-file sinks attached to root
/// and to every named logger, which also propagate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfigBuilder {
    state: BuilderState,
}

impl LogConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from a settings file. Fluent setters still apply on top.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            state: BuilderState::from_settings(settings),
        }
    }
}

impl LoggingBuilder for LogConfigBuilder {
    fn state(&self) -> &BuilderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BuilderState {
        &mut self.state
    }

    fn build_with(&self, env: &dyn Environment) -> Result<DeclarativeConfig, Error> {
        assemble::assemble(&self.state, env)
    }
}
