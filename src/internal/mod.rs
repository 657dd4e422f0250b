//! l4py's own diagnostics, emitted under `l4py.<scope>` through whatever
//! registry is installed, so they obey the same levels and sinks as
//! application records. Before the first install they vanish.

use crate::level::Level;
use crate::record::LogRecord;
use crate::runtime;
use std::io::{self, Write};

/// Logger name prefix for internal diagnostics.
pub const INTERNAL_LOGGER_PREFIX: &str = "l4py";

/// Pre-install calls silently vanish rather than reaching the last resort.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(registry) = runtime::installed() else {
        return;
    };
    let name = format!("{INTERNAL_LOGGER_PREFIX}.{}", scope.to_lowercase());
    if registry.is_enabled_for(&name, level) {
        registry.handle(&LogRecord::new(name, level, msg).location(file!(), line!(), scope));
    }
}

/// Assembly and install details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::DEBUG, scope, msg);
}

/// Milestones such as a settings file being loaded.
pub fn info(scope: &str, msg: &str) {
    log(Level::INFO, scope, msg);
}

/// Non-fatal anomalies.
pub fn warn(scope: &str, msg: &str) {
    log(Level::WARNING, scope, msg);
}

/// Sink failures can't go back through the registry that just failed, so
/// they go straight to stderr.
pub(crate) fn report_sink_error(handler: &str, err: &crate::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "--- Logging error ---\nhandler '{handler}' failed to write: {err}"
    );
}
