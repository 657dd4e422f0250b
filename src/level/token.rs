//! Unvalidated level input: what builder calls, settings files, and environment
//! variables hand us before `build()` decides whether it is a real severity.

use super::{Level, ParseLevelError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer-or-name, exactly as supplied. Validation is deferred to `build()` so
/// the resulting error can name the logger the token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelToken {
    Numeric(u32),
    Named(String),
}

impl LevelToken {
    /// All-digit input becomes numeric; anything else stays a raw name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty()
            && trimmed.bytes().all(|b| b.is_ascii_digit())
            && let Ok(value) = trimmed.parse::<u32>()
        {
            return Self::Numeric(value);
        }
        Self::Named(raw.to_string())
    }

    /// # Errors
    /// Returns `ParseLevelError` when a named token isn't a known severity.
    pub fn resolve(&self) -> Result<Level, ParseLevelError> {
        match self {
            Self::Numeric(value) => Ok(Level::new(*value)),
            Self::Named(name) => name.parse(),
        }
    }

    /// The token as the user wrote it. Error messages quote this verbatim.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Numeric(value) => value.to_string(),
            Self::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for LevelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl From<Level> for LevelToken {
    fn from(level: Level) -> Self {
        Self::Numeric(level.value())
    }
}

impl From<u32> for LevelToken {
    fn from(value: u32) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for LevelToken {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for LevelToken {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

/// One `(logger, level)` pair, sourced from a builder call or an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOverride {
    pub logger: String,
    pub level: LevelToken,
}

impl LevelOverride {
    #[must_use]
    pub fn new(logger: impl Into<String>, level: impl Into<LevelToken>) -> Self {
        Self {
            logger: logger.into(),
            level: level.into(),
        }
    }
}
