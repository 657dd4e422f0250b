//! The declarative artifact `build()` produces and the `Initializer` consumes,
//! plus the optional TOML settings file that can seed a builder.
//!
//! The artifact is plain serde data so it can be dumped, diffed, and reloaded;
//! reference integrity is checked by [`DeclarativeConfig::validate`].

mod schema;
mod settings;

pub use schema::{
    CONSOLE_HANDLER, ConsoleStream, DeclarativeConfig, FILE_HANDLER, FilterSpec, FormatterSpec,
    HandlerSpec, LoggerSpec, RenderRule, RendererKind, SCHEMA_VERSION, SinkSpec,
};
pub use settings::{
    AppSettings, ConsoleSettings, FileSettings, LevelSettings, Settings, TimestampSettings,
};

use crate::error::Error;
use crate::fmt::PatternFormatter;
use std::collections::BTreeMap;

impl DeclarativeConfig {
    /// Empty artifact: no sinks, root at `root_level`.
    #[must_use]
    pub fn empty(root_level: crate::level::Level) -> Self {
        Self {
            version: SCHEMA_VERSION,
            disable_existing_loggers: false,
            filters: BTreeMap::new(),
            formatters: BTreeMap::new(),
            handlers: BTreeMap::new(),
            loggers: BTreeMap::new(),
            root: LoggerSpec {
                level: root_level,
                handlers: Vec::new(),
                filters: Vec::new(),
                propagate: true,
            },
        }
    }

    /// Checks that every handler, formatter, and filter reference resolves and
    /// that literal patterns only name known record attributes.
    ///
    /// # Errors
    /// The first dangling reference or invalid pattern found.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, formatter) in &self.formatters {
            if let RenderRule::Pattern { format } = &formatter.rule {
                PatternFormatter::validate(format).map_err(|reason| Error::InvalidFormat {
                    formatter: name.clone(),
                    reason,
                })?;
            }
        }

        for (name, handler) in &self.handlers {
            if !self.formatters.contains_key(&handler.formatter) {
                return Err(Error::UnknownFormatter {
                    handler: name.clone(),
                    formatter: handler.formatter.clone(),
                });
            }
            self.check_filters(name, &handler.filters)?;
        }

        let loggers = self
            .loggers
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
            .chain(std::iter::once(("root", &self.root)));

        for (name, spec) in loggers {
            if let Some(missing) = spec
                .handlers
                .iter()
                .find(|h| !self.handlers.contains_key(*h))
            {
                return Err(Error::UnknownHandler {
                    logger: name.to_string(),
                    handler: missing.clone(),
                });
            }
            self.check_filters(name, &spec.filters)?;
        }

        Ok(())
    }

    fn check_filters(&self, owner: &str, filters: &[String]) -> Result<(), Error> {
        filters
            .iter()
            .find(|f| !self.filters.contains_key(*f))
            .map_or(Ok(()), |missing| {
                Err(Error::UnknownFilter {
                    owner: owner.to_string(),
                    filter: missing.clone(),
                })
            })
    }

    /// Handler names attached to root, in sink order.
    #[must_use]
    pub fn root_handlers(&self) -> &[String] {
        &self.root.handlers
    }

    /// Single-line JSON.
    ///
    /// # Errors
    /// Serialization failure (not expected for well-formed artifacts).
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON for humans.
    ///
    /// # Errors
    /// Serialization failure.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates an artifact written by [`Self::to_json`] or by hand.
    ///
    /// # Errors
    /// Malformed JSON, invalid levels, or dangling references.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
