//! Environment variables are the deployment-time override channel: a root level,
//! per-logger levels, and the application name.
//!
//! Every function re-reads its source on each call. Nothing is cached, so a
//! variable changed between builder construction and `build()` is honored.

use crate::level::{Level, LevelOverride, LevelToken};
use std::collections::BTreeMap;

/// Shared prefix of every level variable.
pub const LOG_LEVEL_PREFIX: &str = "L4PY_LOG_LEVEL_";
/// Root threshold variable; excluded from per-logger overrides.
pub const LOG_LEVEL_ROOT_KEY: &str = "L4PY_LOG_LEVEL_ROOT";
/// Application name used in every rendered record.
pub const APP_NAME_KEY: &str = "L4PY_APP_NAME";
/// Used when `L4PY_APP_NAME` is unset.
pub const DEFAULT_APP_NAME: &str = "rust-app";

/// Read access to a set of environment variables.
///
/// The process environment is the production source; tests use [`MapEnv`] so
/// they never have to mutate global state.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;

    /// All variables with UTF-8 names and values.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// In-memory environment for tests and embedders that supply variables explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.vars.insert(key.into(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Root threshold from `L4PY_LOG_LEVEL_ROOT`, defaulting to INFO.
#[must_use]
pub fn root_level(env: &dyn Environment) -> LevelToken {
    env.var(LOG_LEVEL_ROOT_KEY)
        .map_or(LevelToken::from(Level::INFO), |raw| LevelToken::parse(&raw))
}

/// Every `L4PY_LOG_LEVEL_<logger>` variable except the root key, sorted by logger name.
#[must_use]
pub fn logger_overrides(env: &dyn Environment) -> Vec<LevelOverride> {
    let mut overrides: Vec<LevelOverride> = env
        .vars()
        .into_iter()
        .filter(|(key, _)| key != LOG_LEVEL_ROOT_KEY)
        .filter_map(|(key, value)| {
            let logger = key
                .strip_prefix(LOG_LEVEL_PREFIX)
                .filter(|name| !name.is_empty())?;
            Some(LevelOverride::new(logger, LevelToken::parse(&value)))
        })
        .collect();
    overrides.sort_by(|a, b| a.logger.cmp(&b.logger));
    overrides
}

/// Application name from `L4PY_APP_NAME`, falling back to [`DEFAULT_APP_NAME`].
#[must_use]
pub fn app_name(env: &dyn Environment) -> String {
    env.var(APP_NAME_KEY)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

/// Host part of the default log file name.
#[must_use]
pub fn host_name(env: &dyn Environment) -> String {
    env.var("HOSTNAME")
        .or_else(|| env.var("COMPUTERNAME"))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
