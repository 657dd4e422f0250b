//! Serde shape of the declarative artifact.

use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Schema marker written to every artifact.
pub const SCHEMA_VERSION: u32 = 1;
/// Handler and formatter name of the console sink.
pub const CONSOLE_HANDLER: &str = "console";
/// Handler and formatter name of the rotating file sink.
pub const FILE_HANDLER: &str = "file";

/// Complete logging configuration: what to render, where to write it, and
/// which loggers pass which severities. Produced atomically by `build()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarativeConfig {
    pub version: u32,
    pub disable_existing_loggers: bool,
    #[serde(default)]
    pub filters: BTreeMap<String, FilterSpec>,
    #[serde(default)]
    pub formatters: BTreeMap<String, FormatterSpec>,
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerSpec>,
    #[serde(default)]
    pub loggers: BTreeMap<String, LoggerSpec>,
    pub root: LoggerSpec,
}

/// Either a fixed-field renderer or a literal pattern, plus timestamp options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSpec {
    #[serde(flatten)]
    pub rule: RenderRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datefmt: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub utc: bool,
}

impl FormatterSpec {
    #[must_use]
    pub const fn renderer(kind: RendererKind) -> Self {
        Self {
            rule: RenderRule::Renderer { renderer: kind },
            datefmt: None,
            utc: false,
        }
    }

    #[must_use]
    pub fn pattern(format: impl Into<String>) -> Self {
        Self {
            rule: RenderRule::Pattern {
                format: format.into(),
            },
            datefmt: None,
            utc: false,
        }
    }
}

/// `{format: ...}` or `{renderer: ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderRule {
    Pattern { format: String },
    Renderer { renderer: RendererKind },
}

/// Closed set of built-in renderers plus registered custom ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RendererKind {
    Json,
    Text,
    /// Resolved against renderers registered with the `Initializer`.
    Custom(String),
}

impl RendererKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RendererKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "json" => Self::Json,
            "text" => Self::Text,
            _ => Self::Custom(name),
        }
    }
}

impl From<RendererKind> for String {
    fn from(kind: RendererKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Sink binding: kind-specific parameters plus formatter and filter references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerSpec {
    #[serde(flatten)]
    pub sink: SinkSpec,
    pub formatter: String,
    #[serde(default)]
    pub filters: Vec<String>,
}

/// Where rendered lines go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SinkSpec {
    Console {
        #[serde(default)]
        stream: ConsoleStream,
    },
    RotatingFile {
        path: PathBuf,
        max_bytes: u64,
        backup_count: u32,
    },
}

/// Console target. Defaults to stderr so stdout stays free for program output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

/// Level, handlers, filters, and propagation for one logger (or root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSpec {
    pub level: Level,
    #[serde(default)]
    pub handlers: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default = "propagate_default")]
    pub propagate: bool,
}

const fn propagate_default() -> bool {
    true
}

/// Built-in filter identities, plus registered custom ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum FilterSpec {
    /// Passes records from `name` and its descendants; an empty name passes everything.
    Logger { name: String },
    /// Passes records at or above `level`.
    MinLevel { level: Level },
    /// Passes records at or below `level`.
    MaxLevel { level: Level },
    /// Resolved against filters registered with the `Initializer`.
    Custom { name: String },
}
