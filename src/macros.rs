//! Call-site logging macros. Unlike the `Logger` methods they capture the
//! enclosing function and module path, and skip argument conversion when the
//! level is disabled.

/// Logs a `%`-style template at an explicit level.
///
/// ```
/// use l4py::{Level, log};
///
/// let logger = l4py::runtime::get_logger("billing");
/// log!(logger, Level::INFO, "charged %s for %d items", "alice", 3);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled_for(level) {
            logger.handle(
                $crate::LogRecord::new(logger.name(), level, $msg)
                    .args(::std::vec![$($crate::Arg::from($arg)),*])
                    .location(::core::file!(), ::core::line!(), $crate::function_name!())
                    .module_path(::core::module_path!()),
            );
        }
    }};
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($rest)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::CRITICAL, $($rest)+)
    };
}

/// Logs at ERROR with `$err` attached as the exception; renderers append
/// `Traceback ...` with its type, message, and `source()` chain.
///
/// `$err` is borrowed, so pass the error value itself rather than a reference.
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.is_enabled_for($crate::Level::ERROR) {
            let function = $crate::function_name!();
            let exception = $crate::ExceptionInfo::from_error(&$err)
                .frame(::core::file!(), ::core::line!(), function);
            logger.handle(
                $crate::LogRecord::new(logger.name(), $crate::Level::ERROR, $msg)
                    .args(::std::vec![$($crate::Arg::from($arg)),*])
                    .location(::core::file!(), ::core::line!(), function)
                    .module_path(::core::module_path!())
                    .exception(exception),
            );
        }
    }};
}
