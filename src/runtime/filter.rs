//! Record predicates attached to loggers and handlers.

use crate::config::FilterSpec;
use crate::level::Level;
use crate::record::LogRecord;
use std::sync::Arc;

/// Returns `false` to drop a record.
pub trait Filter: Send + Sync {
    fn allow(&self, record: &LogRecord) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&LogRecord) -> bool + Send + Sync,
{
    fn allow(&self, record: &LogRecord) -> bool {
        self(record)
    }
}

/// Passes `name` and its dotted descendants. An empty name passes everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerNameFilter {
    name: String,
}

impl LoggerNameFilter {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Filter for LoggerNameFilter {
    fn allow(&self, record: &LogRecord) -> bool {
        let logger = record.logger_name.as_str();
        self.name.is_empty()
            || logger == self.name
            || logger
                .strip_prefix(self.name.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

/// Inclusive severity window; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelRangeFilter {
    min: Option<Level>,
    max: Option<Level>,
}

impl LevelRangeFilter {
    #[must_use]
    pub const fn at_least(level: Level) -> Self {
        Self {
            min: Some(level),
            max: None,
        }
    }

    #[must_use]
    pub const fn at_most(level: Level) -> Self {
        Self {
            min: None,
            max: Some(level),
        }
    }
}

impl Filter for LevelRangeFilter {
    fn allow(&self, record: &LogRecord) -> bool {
        self.min.is_none_or(|min| record.level >= min)
            && self.max.is_none_or(|max| record.level <= max)
    }
}

/// Built-in filter for a spec, or `None` for a custom one.
pub(crate) fn builtin(spec: &FilterSpec) -> Option<Arc<dyn Filter>> {
    match spec {
        FilterSpec::Logger { name } => Some(Arc::new(LoggerNameFilter::new(name.clone()))),
        FilterSpec::MinLevel { level } => Some(Arc::new(LevelRangeFilter::at_least(*level))),
        FilterSpec::MaxLevel { level } => Some(Arc::new(LevelRangeFilter::at_most(*level))),
        FilterSpec::Custom { .. } => None,
    }
}
