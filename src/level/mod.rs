//! Severity levels that gate which records reach which handlers.
//!
//! Levels are numeric so deployments can use integer thresholds between the
//! named ones (`L4PY_LOG_LEVEL_ROOT=25`); names exist only for the well-known values.

mod token;

pub use token::{LevelOverride, LevelToken};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ordered numeric severity. `Ord` lets the registry compare a record against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    /// Inherit the threshold from the nearest configured ancestor.
    pub const NOTSET: Self = Self(0);
    pub const DEBUG: Self = Self(10);
    pub const INFO: Self = Self(20);
    pub const WARNING: Self = Self(30);
    pub const ERROR: Self = Self(40);
    pub const CRITICAL: Self = Self(50);
    /// Same severity as `CRITICAL`; kept for callers that spell it that way.
    pub const FATAL: Self = Self::CRITICAL;

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Canonical uppercase name, `None` for integer-only levels.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NOTSET"),
            10 => Some("DEBUG"),
            20 => Some("INFO"),
            30 => Some("WARNING"),
            40 => Some("ERROR"),
            50 => Some("CRITICAL"),
            _ => None,
        }
    }

    /// Name used in rendered records; unnamed levels read `Level 25`.
    #[must_use]
    pub fn label(self) -> String {
        self.name()
            .map_or_else(|| format!("Level {}", self.0), ToString::to_string)
    }

    /// Named severities in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::DEBUG,
            Self::INFO,
            Self::WARNING,
            Self::ERROR,
            Self::CRITICAL,
        ]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The raw token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts names case-insensitively, plus plain non-negative integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .map(Self)
                .map_err(|_| ParseLevelError(s.to_string()));
        }

        match trimmed.to_uppercase().as_str() {
            "NOTSET" => Ok(Self::NOTSET),
            "DEBUG" => Ok(Self::DEBUG),
            "INFO" => Ok(Self::INFO),
            "WARNING" | "WARN" => Ok(Self::WARNING),
            "ERROR" => Ok(Self::ERROR),
            "CRITICAL" | "FATAL" => Ok(Self::CRITICAL),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = LevelToken::deserialize(deserializer)?;
        token.resolve().map_err(serde::de::Error::custom)
    }
}
