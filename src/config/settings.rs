//! Optional TOML settings file. Seeds a builder with the same knobs the fluent
//! API exposes, so deployments can adjust sinks without a rebuild.

use super::ConsoleStream;
use crate::app_name::{self, AppName};
use crate::error::Error;
use crate::internal;
use crate::level::LevelToken;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file (or no file) yields the builder defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub app: AppSettings,
    pub console: ConsoleSettings,
    pub file: FileSettings,
    pub levels: LevelSettings,
    pub timestamp: TimestampSettings,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Overrides `L4PY_APP_NAME` when set.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleSettings {
    pub enabled: bool,
    pub json: bool,
    /// Literal `%(attr)s` pattern. Wins over `json` when present.
    pub format: Option<String>,
    pub stream: ConsoleStream,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            json: false,
            format: None,
            stream: ConsoleStream::Stderr,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSettings {
    pub enabled: bool,
    /// Tilde is expanded when the sink opens the file.
    pub path: Option<String>,
    pub json: bool,
    pub format: Option<String>,
    /// Signed so a negative value reaches the builder and fails there with a clear error.
    pub max_size_mb: i64,
    pub max_count: i64,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            json: true,
            format: None,
            max_size_mb: 10,
            max_count: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LevelSettings {
    pub root: Option<LevelToken>,
    /// Explicit per-logger levels. Environment overrides still win over these.
    pub loggers: BTreeMap<String, LevelToken>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimestampSettings {
    /// strftime pattern.
    pub format: Option<String>,
    pub utc: bool,
}

impl Settings {
    /// Loads `<config dir>/l4py/l4py.toml`. A missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or the TOML is malformed.
    pub fn load() -> Result<Self, Error> {
        internal::debug("SETTINGS", "Loading settings from default location");
        let path = Self::get_config_path()?;
        let settings = Self::load_from(&path)?;
        internal::info(
            "SETTINGS",
            &format!("Settings loaded from {}", path.display()),
        );
        Ok(settings)
    }

    /// Loads settings from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Read or parse failure.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = Path::new(&expanded);

        if !path.exists() {
            internal::debug("SETTINGS", "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Malformed TOML or a field of the wrong type.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Default settings file location.
    ///
    /// # Errors
    /// No home/config directory could be determined for this user.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("l4py").join("l4py.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// `[app] name`, if configured.
    #[must_use]
    pub fn app_name(&self) -> Option<AppName> {
        self.app.name.as_deref().map(AppName::from)
    }

    /// Publishes `[app] name` as the process-wide application name.
    /// Returns `false` when no name is configured or one was already set.
    pub fn init_app_name(&self) -> bool {
        self.app_name().is_some_and(app_name::init)
    }
}
