//! Single-line human-readable renderer for terminals.

use super::{Color, Formatter, TimestampFormat, colorize};
use crate::app_name::AppName;
use crate::record::LogRecord;

/// `<timestamp> [<LEVEL   >] <app> <logger> <file>:<line> <function>: <message>`,
/// colored by level.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    app_name: AppName,
    timestamp: TimestampFormat,
    /// Piped output and files don't want ANSI escape codes.
    colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(app_name: AppName) -> Self {
        Self {
            app_name,
            timestamp: TimestampFormat::default(),
            colors: true,
        }
    }

    #[must_use]
    pub fn timestamp_format(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let level = record.level_name();
        let mut line = format!(
            "{} [{level:<8}] {} {} {}:{} {}: {}",
            self.timestamp.format(record.created),
            self.app_name,
            record.logger_name,
            record.file_name(),
            record.line_number,
            record.function_name,
            record.rendered_message(),
        );

        // Trace stays inside the color pair so the whole entry reads as one block.
        if let Some(exception) = &record.exception {
            line.push('\n');
            line.push_str(&exception.format_trace());
        }

        match Color::for_level_name(&level) {
            Some(color) if self.colors => colorize(&line, color),
            _ => line,
        }
    }
}
