//! Carries everything a renderer needs for one log line, so formatters never
//! have to reach back into the logger or the call site.

mod arg;
mod exception;

pub use arg::Arg;
pub use exception::{ExceptionInfo, Frame};

use crate::fmt::interpolate;
use crate::level::Level;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Placeholder for records that weren't created through the capturing macros.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// One emitted event. Message interpolation is deferred to rendering so
/// filtered-out records never pay for it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub created: DateTime<Utc>,
    pub logger_name: String,
    pub level: Level,
    /// Full source path as reported by `file!()`/`Location`.
    pub pathname: String,
    pub line_number: u32,
    pub function_name: String,
    pub module_path: String,
    /// Raw message before positional-argument substitution.
    pub message: String,
    pub args: Vec<Arg>,
    pub exception: Option<ExceptionInfo>,
}

impl LogRecord {
    #[must_use]
    pub fn new(logger_name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            created: Utc::now(),
            logger_name: logger_name.into(),
            level,
            pathname: String::new(),
            line_number: 0,
            function_name: UNKNOWN_FUNCTION.to_string(),
            module_path: String::new(),
            message: message.into(),
            args: Vec::new(),
            exception: None,
        }
    }

    #[must_use]
    pub fn args(mut self, args: Vec<Arg>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn location(mut self, pathname: &str, line: u32, function: &str) -> Self {
        self.pathname = pathname.to_string();
        self.line_number = line;
        self.function_name = function.to_string();
        self
    }

    #[must_use]
    pub fn module_path(mut self, module_path: &str) -> Self {
        self.module_path = module_path.to_string();
        self
    }

    #[must_use]
    pub fn exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Tests pin the clock to get byte-exact output.
    #[must_use]
    pub const fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Base name of `pathname`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        Path::new(&self.pathname)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.pathname)
    }

    /// File stem, the closest analogue to a module name for a source file.
    #[must_use]
    pub fn module(&self) -> &str {
        Path::new(&self.pathname)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.pathname)
    }

    /// Message with positional arguments applied; falls back to the raw message
    /// when placeholders and arguments don't line up.
    #[must_use]
    pub fn rendered_message(&self) -> String {
        interpolate::positional_or_literal(&self.message, &self.args)
    }

    #[must_use]
    pub fn level_name(&self) -> String {
        self.level.label()
    }

    /// Milliseconds component of `created`.
    #[must_use]
    pub fn msecs(&self) -> u32 {
        self.created.timestamp_subsec_millis()
    }

    /// Seconds since the epoch with sub-second precision.
    #[must_use]
    pub fn created_secs(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let secs = self.created.timestamp() as f64;
        secs + f64::from(self.created.timestamp_subsec_micros()) / 1_000_000.0
    }
}
