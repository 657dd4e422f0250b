//! One JSON object per line, so `grep`, `jq` and log shippers can consume the
//! file without a framing protocol.

use super::{Formatter, TimestampFormat};
use crate::app_name::AppName;
use crate::record::LogRecord;
use serde::Serialize;

/// Fixed key set, serialized in declaration order.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    timestamp: String,
    app_name: &'a str,
    logger_name: &'a str,
    level: String,
    file_name: &'a str,
    line_number: u32,
    function_name: &'a str,
    message: String,
    /// Present only when the record carries an exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    exception: Option<String>,
}

/// Structured renderer.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    app_name: AppName,
    timestamp: TimestampFormat,
}

impl JsonFormatter {
    #[must_use]
    pub fn new(app_name: AppName) -> Self {
        Self {
            app_name,
            timestamp: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn timestamp_format(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let entry = JsonEntry {
            timestamp: self.timestamp.format(record.created),
            app_name: self.app_name.as_str(),
            logger_name: &record.logger_name,
            level: record.level_name(),
            file_name: record.file_name(),
            line_number: record.line_number,
            function_name: &record.function_name,
            message: record.rendered_message(),
            exception: record.exception.as_ref().map(|e| e.format_trace()),
        };

        serde_json::to_string(&entry).unwrap_or_else(|e| {
            serde_json::json!({
                "level": record.level_name(),
                "message": record.message,
                "error": e.to_string(),
            })
            .to_string()
        })
    }
}
