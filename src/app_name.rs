//! Application name stamped on every rendered record.
//!
//! Formatters receive an [`AppName`] value at construction instead of reading a
//! global on every record. The process-wide instance is set at most once,
//! explicitly via [`init`] or lazily from `L4PY_APP_NAME`, and is read-only afterwards.

use crate::env::{self, Environment, ProcessEnv};
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<AppName> = OnceLock::new();

/// Cheap-to-clone shared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(Arc<str>);

impl AppName {
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// `L4PY_APP_NAME`, or the generic default.
    #[must_use]
    pub fn from_env(env: &dyn Environment) -> Self {
        Self::new(env::app_name(env))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AppName {
    fn default() -> Self {
        Self::new(env::DEFAULT_APP_NAME)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AppName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Sets the process-wide name. Only the first call (or the first read) wins;
/// returns `false` when a name was already fixed.
pub fn init(name: impl Into<AppName>) -> bool {
    let name = name.into();
    let mut applied = false;
    GLOBAL.get_or_init(|| {
        applied = true;
        name
    });
    applied
}

/// The process-wide name, resolving it from the environment on first use.
pub fn global() -> &'static AppName {
    GLOBAL.get_or_init(|| AppName::from_env(&ProcessEnv))
}
