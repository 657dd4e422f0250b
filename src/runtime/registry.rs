//! Immutable dispatch table built from a declarative config.

use super::filter::Filter;
use super::logger::Logger;
use crate::error::Error;
use crate::fmt::Formatter;
use crate::internal;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::Sink;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named sink with its formatter and filters. Shared by name between every
/// logger that lists it.
pub(crate) struct Handler {
    pub(crate) name: String,
    pub(crate) formatter: Arc<dyn Formatter>,
    pub(crate) filters: Vec<Arc<dyn Filter>>,
    pub(crate) sink: Arc<dyn Sink>,
}

impl Handler {
    fn emit(&self, record: &LogRecord) {
        if !self.filters.iter().all(|f| f.allow(record)) {
            return;
        }
        let entry = self.formatter.format(record);
        if let Err(e) = self.sink.write_entry(&entry) {
            internal::report_sink_error(&self.name, &e);
        }
    }
}

pub(crate) struct Node {
    pub(crate) level: Level,
    pub(crate) handlers: Vec<Arc<Handler>>,
    pub(crate) filters: Vec<Arc<dyn Filter>>,
    pub(crate) propagate: bool,
}

struct Inner {
    root: Node,
    loggers: HashMap<String, Node>,
    handlers: Vec<Arc<Handler>>,
}

/// Cheap to clone; every clone dispatches through the same sinks.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("root_level", &self.inner.root.level)
            .field("handlers", &self.handler_names())
            .field("loggers", &self.inner.loggers.len())
            .finish()
    }
}

/// `a.b.c`, `a.b`, `a`.
fn lineage(name: &str) -> impl Iterator<Item = &str> {
    std::iter::successors((!name.is_empty()).then_some(name), |current: &&str| {
        let current: &str = *current;
        current.rfind('.').map(|dot| &current[..dot])
    })
}

impl Registry {
    pub(crate) fn new(root: Node, loggers: HashMap<String, Node>, handlers: Vec<Arc<Handler>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                root,
                loggers,
                handlers,
            }),
        }
    }

    /// Level of the nearest configured ancestor-or-self that isn't NOTSET, else root's.
    #[must_use]
    pub fn effective_level(&self, logger: &str) -> Level {
        lineage(logger)
            .filter_map(|name| self.inner.loggers.get(name))
            .map(|node| node.level)
            .find(|level| *level != Level::NOTSET)
            .unwrap_or(self.inner.root.level)
    }

    #[must_use]
    pub fn is_enabled_for(&self, logger: &str, level: Level) -> bool {
        level >= self.effective_level(logger)
    }

    /// Handler names a record from `logger` reaches, in dispatch order, each once.
    #[must_use]
    pub fn reached_handlers(&self, logger: &str) -> Vec<String> {
        self.reached(logger)
            .iter()
            .map(|handler| handler.name.clone())
            .collect()
    }

    /// Every handler name, sorted.
    #[must_use]
    pub fn handler_names(&self) -> Vec<String> {
        self.inner
            .handlers
            .iter()
            .map(|handler| handler.name.clone())
            .collect()
    }

    /// Handle bound to this registry rather than the active one.
    #[must_use]
    pub fn logger(&self, name: &str) -> Logger {
        Logger::bound(name, self.clone())
    }

    /// Level check, originating-logger filters, then every reached handler.
    pub fn handle(&self, record: &LogRecord) {
        let name = record.logger_name.as_str();
        if !self.is_enabled_for(name, record.level) {
            return;
        }
        if !self.origin(name).filters.iter().all(|f| f.allow(record)) {
            return;
        }
        for handler in self.reached(name) {
            handler.emit(record);
        }
    }

    /// Flushes every sink, reporting the first failure after trying them all.
    ///
    /// # Errors
    /// The first sink flush error.
    pub fn flush(&self) -> Result<(), Error> {
        let mut first = None;
        for handler in &self.inner.handlers {
            if let Err(e) = handler.sink.flush()
                && first.is_none()
            {
                first = Some(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// Nearest configured node for `logger`; unconfigured names inherit its filters.
    fn origin(&self, logger: &str) -> &Node {
        lineage(logger)
            .find_map(|name| self.inner.loggers.get(name))
            .unwrap_or(&self.inner.root)
    }

    fn reached(&self, logger: &str) -> Vec<&Arc<Handler>> {
        let mut reached: Vec<&Arc<Handler>> = Vec::new();
        let mut to_root = true;
        for node in lineage(logger).filter_map(|name| self.inner.loggers.get(name)) {
            collect_unique(&mut reached, &node.handlers);
            if !node.propagate {
                to_root = false;
                break;
            }
        }
        if to_root {
            collect_unique(&mut reached, &self.inner.root.handlers);
        }
        reached
    }
}

fn collect_unique<'a>(reached: &mut Vec<&'a Arc<Handler>>, handlers: &'a [Arc<Handler>]) {
    for handler in handlers {
        if !reached.iter().any(|seen| seen.name == handler.name) {
            reached.push(handler);
        }
    }
}
