//! Unified error type for configuration assembly, installation, and settings loading.
//!
//! Formatting never surfaces errors to the caller (renderers degrade to a literal
//! line instead), so everything here is raised synchronously from `build()`,
//! `Initializer::apply`, or `Settings::load`.

/// Error type for l4py operations.
#[derive(Debug)]
pub enum Error {
    /// Level token is neither a known severity name nor an integer.
    InvalidLevel { logger: String, value: String },
    /// Rotation size or backup count below zero (or too large to express in bytes).
    InvalidRotation { key: &'static str, value: i64 },
    /// Literal format pattern references an attribute records don't carry.
    InvalidFormat { formatter: String, reason: String },
    /// A logger (or root) references a handler that isn't declared.
    UnknownHandler { logger: String, handler: String },
    /// A handler references a formatter that isn't declared.
    UnknownFormatter { handler: String, formatter: String },
    /// A handler or logger references a filter that isn't declared.
    UnknownFilter { owner: String, filter: String },
    /// Config names a custom renderer nobody registered with the initializer.
    UnregisteredRenderer(String),
    /// Config names a custom filter nobody registered with the initializer.
    UnregisteredFilter(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML settings parsing error.
    SettingsParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// JSON (de)serialization of the declarative artifact failed.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel { logger, value } => {
                write!(f, "invalid level for logger '{logger}': '{value}'")
            }
            Self::InvalidRotation { key, value } => {
                write!(f, "invalid rotation parameter {key}: {value}")
            }
            Self::InvalidFormat { formatter, reason } => {
                write!(f, "invalid format for formatter '{formatter}': {reason}")
            }
            Self::UnknownHandler { logger, handler } => {
                write!(f, "logger '{logger}' references unknown handler '{handler}'")
            }
            Self::UnknownFormatter { handler, formatter } => {
                write!(
                    f,
                    "handler '{handler}' references unknown formatter '{formatter}'"
                )
            }
            Self::UnknownFilter { owner, filter } => {
                write!(f, "'{owner}' references unknown filter '{filter}'")
            }
            Self::UnregisteredRenderer(name) => write!(f, "renderer not registered: {name}"),
            Self::UnregisteredFilter(name) => write!(f, "filter not registered: {name}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SettingsParse(e) => write!(f, "settings parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Serialize(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::SettingsParse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::SettingsParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

impl Error {
    /// Configuration mistakes are deployment bugs; only I/O failures are worth retrying.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
