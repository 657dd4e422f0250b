//! Named logging handle.

use super::registry::Registry;
use crate::level::Level;
use crate::record::{Arg, ExceptionInfo, LogRecord, UNKNOWN_FUNCTION};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Cheap to clone. Unbound handles (from [`super::get_logger`]) resolve the
/// active registry on every call, so they follow later installs.
///
/// The methods record file and line but not the function, which renders as
/// `<unknown>`; the [`crate::info!`] family of macros fills it in.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    registry: Option<Registry>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("bound", &self.registry.is_some())
            .finish()
    }
}

impl Logger {
    pub(crate) fn unbound(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            registry: None,
        }
    }

    pub(crate) fn bound(name: &str, registry: Registry) -> Self {
        Self {
            name: Arc::from(name),
            registry: Some(registry),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn with_registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        match &self.registry {
            Some(registry) => f(registry),
            None => f(&super::active()),
        }
    }

    #[must_use]
    pub fn effective_level(&self) -> Level {
        self.with_registry(|registry| registry.effective_level(&self.name))
    }

    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.with_registry(|registry| registry.is_enabled_for(&self.name, level))
    }

    /// Dispatches a fully built record under this logger's name.
    pub fn handle(&self, mut record: LogRecord) {
        if record.logger_name != *self.name {
            record.logger_name = self.name.to_string();
        }
        self.with_registry(|registry| registry.handle(&record));
    }

    /// `msg` is a `%`-style template over `args`; a mismatch logs the template verbatim.
    /// `function_name` is `<unknown>`; use [`crate::log!`] to capture it.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, args: Vec<Arg>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let caller = Location::caller();
        self.handle(
            LogRecord::new(self.name.as_ref(), level, msg)
                .args(args)
                .location(caller.file(), caller.line(), UNKNOWN_FUNCTION),
        );
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::DEBUG, msg, Vec::new());
    }

    /// See [`Self::log`]; [`crate::info!`] also captures the function name.
    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::INFO, msg, Vec::new());
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Level::WARNING, msg, Vec::new());
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::ERROR, msg, Vec::new());
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Level::CRITICAL, msg, Vec::new());
    }

    /// ERROR record carrying `exception`; renderers append its trace.
    #[track_caller]
    pub fn exception(&self, msg: &str, exception: ExceptionInfo) {
        if !self.is_enabled_for(Level::ERROR) {
            return;
        }
        let caller = Location::caller();
        self.handle(
            LogRecord::new(self.name.as_ref(), Level::ERROR, msg)
                .location(caller.file(), caller.line(), UNKNOWN_FUNCTION)
                .exception(exception),
        );
    }

    /// [`Self::exception`] for any error value, walking its `source()` chain.
    #[track_caller]
    pub fn error_with<E: StdError + 'static>(&self, msg: &str, err: &E) {
        let caller = Location::caller();
        let exception =
            ExceptionInfo::from_error(err).frame(caller.file(), caller.line(), UNKNOWN_FUNCTION);
        self.exception(msg, exception);
    }
}
