//! Literal `%(attribute)s` patterns, for deployments that already have a line
//! format their tooling parses.

use super::{Formatter, TimestampFormat, interpolate};
use crate::app_name::AppName;
use crate::record::{Arg, LogRecord};

/// Attributes a pattern may reference.
pub const RECORD_ATTRIBUTES: &[&str] = &[
    "asctime",
    "created",
    "msecs",
    "name",
    "levelname",
    "levelno",
    "pathname",
    "filename",
    "module",
    "lineno",
    "funcName",
    "message",
    "app_name",
    "process",
    "threadName",
];

/// Renders a caller-supplied pattern; an attached exception trace follows on its own line.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    app_name: AppName,
    timestamp: TimestampFormat,
}

impl PatternFormatter {
    #[must_use]
    pub fn new(pattern: impl Into<String>, app_name: AppName) -> Self {
        Self {
            pattern: pattern.into(),
            app_name,
            timestamp: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn timestamp_format(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks a pattern against a synthetic record so mistakes surface at
    /// configuration time instead of on every log call.
    ///
    /// # Errors
    /// Returns a human-readable reason when a key is unknown or a conversion can't apply.
    pub fn validate(pattern: &str) -> Result<(), String> {
        if let Some(key) = interpolate::mapping_keys(pattern)
            .into_iter()
            .find(|key| !RECORD_ATTRIBUTES.contains(&key.as_str()))
        {
            return Err(format!("unknown record attribute '{key}'"));
        }

        let probe = Self::new(pattern, AppName::default());
        let record = LogRecord::new("validate", crate::level::Level::INFO, "probe");
        interpolate::mapping(pattern, |key| probe.attribute(&record, key))
            .map(drop)
            .map_err(|e| e.to_string())
    }

    fn attribute(&self, record: &LogRecord, key: &str) -> Option<Arg> {
        let value = match key {
            "asctime" => Arg::Str(self.timestamp.format(record.created)),
            "created" => Arg::Float(record.created_secs()),
            "msecs" => Arg::UInt(u64::from(record.msecs())),
            "name" => Arg::Str(record.logger_name.clone()),
            "levelname" => Arg::Str(record.level_name()),
            "levelno" => Arg::UInt(u64::from(record.level.value())),
            "pathname" => Arg::Str(record.pathname.clone()),
            "filename" => Arg::Str(record.file_name().to_string()),
            "module" => Arg::Str(record.module().to_string()),
            "lineno" => Arg::UInt(u64::from(record.line_number)),
            "funcName" => Arg::Str(record.function_name.clone()),
            "message" => Arg::Str(record.rendered_message()),
            "app_name" => Arg::Str(self.app_name.to_string()),
            "process" => Arg::UInt(u64::from(std::process::id())),
            "threadName" => Arg::Str(
                std::thread::current()
                    .name()
                    .unwrap_or("unnamed")
                    .to_string(),
            ),
            _ => return None,
        };
        Some(value)
    }
}

impl Formatter for PatternFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut line = interpolate::mapping(&self.pattern, |key| self.attribute(record, key))
            .unwrap_or_else(|_| record.rendered_message());

        if let Some(exception) = &record.exception {
            line.push('\n');
            line.push_str(&exception.format_trace());
        }
        line
    }
}
