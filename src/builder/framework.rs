//! Builder variant for a web framework whose loggers should not double-log
//! through root and whose SQL logger is noisy enough to need its own switch.

use super::{BuilderState, LoggingBuilder, assemble};
use crate::config::{DeclarativeConfig, LoggerSpec, Settings};
use crate::env::{self, Environment};
use crate::error::Error;
use crate::level::{Level, LevelToken};

/// Conventional framework logger name.
pub const DEFAULT_FRAMEWORK_LOGGER: &str = "django";
/// Conventional SQL logger name under the default framework.
pub const DEFAULT_SQL_LOGGER: &str = "django.db.backends";

const SQL_LOGGER_SUFFIX: &str = ".db.backends";

/// Everything [`super::LogConfigBuilder`] does, plus a dedicated framework
/// logger attached directly to the root sinks with propagation off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkLogConfigBuilder {
    state: BuilderState,
    framework: String,
    framework_level: Option<LevelToken>,
    sql_logger: Option<String>,
    show_sql: bool,
}

impl Default for FrameworkLogConfigBuilder {
    fn default() -> Self {
        Self {
            state: BuilderState::default(),
            framework: DEFAULT_FRAMEWORK_LOGGER.to_string(),
            framework_level: None,
            sql_logger: None,
            show_sql: false,
        }
    }
}

impl FrameworkLogConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from a settings file; the framework options keep their defaults.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            state: BuilderState::from_settings(settings),
            ..Self::default()
        }
    }

    /// Framework logger name. The SQL logger follows as `<framework>.db.backends`
    /// unless [`Self::sql_logger`] names it.
    #[must_use]
    pub fn framework(mut self, name: impl Into<String>) -> Self {
        self.framework = name.into();
        self
    }

    /// Framework logger level. Defaults to the resolved root level.
    #[must_use]
    pub fn framework_level(mut self, level: impl Into<LevelToken>) -> Self {
        self.framework_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn sql_logger(mut self, name: impl Into<String>) -> Self {
        self.sql_logger = Some(name.into());
        self
    }

    fn sql_logger_name(&self) -> String {
        self.sql_logger
            .clone()
            .unwrap_or_else(|| format!("{}{SQL_LOGGER_SUFFIX}", self.framework))
    }

    /// Forces the SQL logger to DEBUG, regardless of any other override.
    #[must_use]
    pub const fn show_sql(mut self, show: bool) -> Self {
        self.show_sql = show;
        self
    }

    /// Env override for the framework logger, else the explicit level, else root.
    fn resolve_framework_level(
        &self,
        config: &DeclarativeConfig,
        env: &dyn Environment,
    ) -> Result<Level, Error> {
        let from_env = env::logger_overrides(env)
            .into_iter()
            .find(|over| over.logger == self.framework)
            .map(|over| over.level);

        match from_env.or_else(|| self.framework_level.clone()) {
            Some(token) => token.resolve().map_err(|_| Error::InvalidLevel {
                logger: self.framework.clone(),
                value: token.raw(),
            }),
            None => Ok(config.root.level),
        }
    }
}

impl LoggingBuilder for FrameworkLogConfigBuilder {
    fn state(&self) -> &BuilderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BuilderState {
        &mut self.state
    }

    fn build_with(&self, env: &dyn Environment) -> Result<DeclarativeConfig, Error> {
        let mut config = assemble::assemble(&self.state, env)?;
        let level = self.resolve_framework_level(&config, env)?;

        let attached = |level| LoggerSpec {
            level,
            handlers: config.root.handlers.clone(),
            filters: config.root.filters.clone(),
            propagate: false,
        };
        let framework = attached(level);
        let sql = self.show_sql.then(|| attached(Level::DEBUG));

        config.loggers.insert(self.framework.clone(), framework);
        if let Some(sql) = sql {
            config.loggers.insert(self.sql_logger_name(), sql);
        }

        config.validate()?;
        Ok(config)
    }
}
