//! Routes `log` facade records into the active registry, so dependencies that
//! log through `log::info!` land in the same sinks.

use crate::level::Level;
use crate::record::{LogRecord, UNKNOWN_FUNCTION};
use std::sync::OnceLock;

/// `log` has a finer level than DEBUG; it renders as `Level 5`.
const TRACE: Level = Level::new(5);

struct Bridge;

const fn level_for(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARNING,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => TRACE,
    }
}

/// `log` targets default to the module path; dotted names keep hierarchy lookups working.
fn logger_name(target: &str) -> String {
    target.replace("::", ".")
}

impl log::Log for Bridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        super::active().is_enabled_for(&logger_name(metadata.target()), level_for(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let registry = super::active();
        let name = logger_name(record.target());
        let level = level_for(record.level());
        if !registry.is_enabled_for(&name, level) {
            return;
        }

        let mut entry = LogRecord::new(name, level, record.args().to_string()).location(
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
            UNKNOWN_FUNCTION,
        );
        if let Some(module_path) = record.module_path() {
            entry = entry.module_path(module_path);
        }
        registry.handle(&entry);
    }

    fn flush(&self) {
        let _ = super::active().flush();
    }
}

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Installs the bridge as the `log` logger once per process. Another `log`
/// implementation already installed wins; that is reported, not fatal.
pub(super) fn register() {
    let registered = *REGISTERED.get_or_init(|| {
        let ok = log::set_boxed_logger(Box::new(Bridge)).is_ok();
        if ok {
            log::set_max_level(log::LevelFilter::Trace);
        }
        ok
    });
    if !registered {
        crate::internal::warn("BRIDGE", "Another `log` implementation is installed; bridge inactive");
    }
}
