//! Timestamp rendering shared by every renderer.

use chrono::{DateTime, Local, Utc};

/// `2024-05-01T13:45:12.345`; second precision isn't enough to order bursts of records.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// strftime pattern plus the zone to render in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    pattern: String,
    utc: bool,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            utc: false,
        }
    }
}

impl TimestampFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` keeps the default pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Option<&str>) -> Self {
        self.pattern = pattern.unwrap_or(DEFAULT_TIMESTAMP_FORMAT).to_string();
        self
    }

    /// Render in UTC instead of local time.
    #[must_use]
    pub const fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    #[must_use]
    pub fn pattern_str(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.utc
    }

    /// Renders `created`. An invalid strftime pattern falls back to the default
    /// instead of panicking inside chrono's `Display`.
    #[must_use]
    pub fn format(&self, created: DateTime<Utc>) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let written = if self.utc {
            write!(out, "{}", created.format(&self.pattern))
        } else {
            write!(out, "{}", created.with_timezone(&Local).format(&self.pattern))
        };

        if written.is_err() {
            out.clear();
            let fallback = if self.utc {
                created.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
            } else {
                created
                    .with_timezone(&Local)
                    .format(DEFAULT_TIMESTAMP_FORMAT)
                    .to_string()
            };
            out.push_str(&fallback);
        }
        out
    }
}
