//! Record rendering: the fixed-field JSON and text renderers, the literal
//! pattern renderer, and the pieces they share (timestamps, color table,
//! percent interpolation).

mod color;
pub mod interpolate;
mod json;
mod pattern;
mod text;
mod time;

pub use color::{Color, colorize};
pub use interpolate::InterpolationError;
pub use json::JsonFormatter;
pub use pattern::{PatternFormatter, RECORD_ATTRIBUTES};
pub use text::TextFormatter;
pub use time::{DEFAULT_TIMESTAMP_FORMAT, TimestampFormat};

use crate::record::LogRecord;

/// Turns one record into one rendered entry. Implementations must not fail:
/// a logging call never aborts the caller, so mismatches degrade to a fallback line.
///
/// `Send + Sync` because one formatter instance serves every thread that logs through its handler.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> String {
        self(record)
    }
}
