#![forbid(unsafe_code)]

//! `l4py` - declarative logging configuration with environment overrides.
//!
//! A fluent builder assembles a [`DeclarativeConfig`] (formatters, handlers,
//! per-logger levels, filters), merging `L4PY_LOG_LEVEL_*` overrides at build
//! time. An [`Initializer`] turns that artifact into a live [`Registry`] that
//! renders records as colored text, JSON lines, or a literal `%(attr)s` pattern.
//!
//! # Example
//!
//! ```no_run
//! use l4py::{LogConfigBuilder, LoggingBuilder, info};
//!
//! LogConfigBuilder::new()
//!     .file("logs/app.log")
//!     .add_logger("app.db", "WARNING")
//!     .init()?;
//!
//! let logger = l4py::get_logger!("app");
//! info!(logger, "listening on port %d", 8080);
//! # Ok::<(), l4py::Error>(())
//! ```
//!
//! # Environment
//!
//! - `L4PY_APP_NAME`: application name shown in every entry
//! - `L4PY_LOG_LEVEL_ROOT`: root threshold when the builder sets none
//! - `L4PY_LOG_LEVEL_<logger>`: per-logger threshold, wins over builder calls
//!
//! # Features
//!
//! - `log-bridge` (default): routes `log` facade records into the active registry

pub mod app_name;
pub mod builder;
pub mod config;
pub mod env;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
mod macros;
pub mod naming;
pub mod record;
pub mod runtime;
pub mod sink;

pub use app_name::AppName;
pub use builder::{FrameworkLogConfigBuilder, LogConfigBuilder, LoggingBuilder};
pub use config::{DeclarativeConfig, Settings};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::Error;
pub use fmt::{Formatter, JsonFormatter, PatternFormatter, TextFormatter};
pub use level::{Level, LevelOverride, LevelToken, ParseLevelError};
pub use record::{Arg, ExceptionInfo, Frame, LogRecord};
pub use runtime::{Filter, Initializer, Logger, Registry, get_logger};
pub use sink::{ConsoleSink, MemorySink, RotatingFileSink, Sink};
