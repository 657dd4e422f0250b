//! Turns a [`DeclarativeConfig`] into a live [`Registry`] and keeps the
//! process-wide active one.
//!
//! Before anything is installed, records go through a last-resort registry:
//! WARNING and above, bare message, stderr.

#[cfg(feature = "log-bridge")]
mod bridge;
mod filter;
mod logger;
mod registry;

pub use filter::{Filter, LevelRangeFilter, LoggerNameFilter};
pub use logger::Logger;
pub use registry::Registry;

use crate::app_name::{self, AppName};
use crate::config::{DeclarativeConfig, FilterSpec, FormatterSpec, RenderRule, RendererKind};
use crate::error::Error;
use crate::fmt::{Formatter, JsonFormatter, PatternFormatter, TextFormatter, TimestampFormat};
use crate::internal;
use crate::level::Level;
use crate::sink::{self, ConsoleSink, Sink};
use registry::{Handler, Node};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static ACTIVE: RwLock<Option<Registry>> = RwLock::new(None);

static LAST_RESORT: LazyLock<Registry> = LazyLock::new(|| {
    let handler = Arc::new(Handler {
        name: "last-resort".to_string(),
        formatter: Arc::new(PatternFormatter::new("%(message)s", AppName::default())),
        filters: Vec::new(),
        sink: Arc::new(ConsoleSink::default()),
    });
    let root = Node {
        level: Level::WARNING,
        handlers: vec![Arc::clone(&handler)],
        filters: Vec::new(),
        propagate: true,
    };
    Registry::new(root, HashMap::new(), vec![handler])
});

/// The installed registry, or the last-resort one.
#[must_use]
pub fn active() -> Registry {
    installed().unwrap_or_else(|| LAST_RESORT.clone())
}

/// The installed registry, if any.
#[must_use]
pub fn installed() -> Option<Registry> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Drops the installed registry; later records go to the last resort.
pub fn uninstall() -> Option<Registry> {
    ACTIVE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// Handle that follows whatever registry is active when it logs.
#[must_use]
pub fn get_logger(name: &str) -> Logger {
    Logger::unbound(name)
}

/// Collects everything a config refers to by name but can't describe itself:
/// custom renderers and filters, replacement sinks, and the app name.
#[derive(Default)]
pub struct Initializer {
    app_name: Option<AppName>,
    renderers: HashMap<String, Arc<dyn Formatter>>,
    filters: HashMap<String, Arc<dyn Filter>>,
    routes: HashMap<String, Arc<dyn Sink>>,
}

impl std::fmt::Debug for Initializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Initializer")
            .field("app_name", &self.app_name)
            .field("renderers", &self.renderers.keys().collect::<Vec<_>>())
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Initializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// App name given to built-in renderers. Defaults to the process-wide one.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<AppName>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Makes `{renderer: <name>}` resolvable.
    #[must_use]
    pub fn register_renderer(
        mut self,
        name: impl Into<String>,
        renderer: impl Formatter + 'static,
    ) -> Self {
        self.renderers.insert(name.into(), Arc::new(renderer));
        self
    }

    /// Makes `{filter: custom, name: <name>}` resolvable.
    #[must_use]
    pub fn register_filter(mut self, name: impl Into<String>, filter: impl Filter + 'static) -> Self {
        self.filters.insert(name.into(), Arc::new(filter));
        self
    }

    /// Replaces the sink of handler `handler` while keeping its formatter and filters.
    #[must_use]
    pub fn route(mut self, handler: impl Into<String>, sink: impl Sink + 'static) -> Self {
        self.routes.insert(handler.into(), Arc::new(sink));
        self
    }

    /// Builds a registry without touching the active one.
    ///
    /// # Errors
    /// Dangling references, invalid patterns, or unregistered custom
    /// renderers and filters.
    pub fn apply(&self, config: &DeclarativeConfig) -> Result<Registry, Error> {
        config.validate()?;
        let app_name = self
            .app_name
            .clone()
            .unwrap_or_else(|| app_name::global().clone());

        let formatters = config
            .formatters
            .iter()
            .map(|(name, spec)| Ok((name.as_str(), self.formatter(spec, &app_name)?)))
            .collect::<Result<HashMap<_, _>, Error>>()?;

        let filters = config
            .filters
            .iter()
            .map(|(name, spec)| Ok((name.as_str(), self.filter(spec)?)))
            .collect::<Result<HashMap<_, _>, Error>>()?;
        let pick = |names: &[String]| -> Vec<Arc<dyn Filter>> {
            names
                .iter()
                .filter_map(|name| filters.get(name.as_str()).cloned())
                .collect()
        };

        let handlers: BTreeMap<&str, Arc<Handler>> = config
            .handlers
            .iter()
            .filter_map(|(name, spec)| {
                let formatter = formatters.get(spec.formatter.as_str())?;
                let sink = self
                    .routes
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| sink::from_spec(&spec.sink));
                let handler = Handler {
                    name: name.clone(),
                    formatter: Arc::clone(formatter),
                    filters: pick(&spec.filters),
                    sink,
                };
                Some((name.as_str(), Arc::new(handler)))
            })
            .collect();
        let attach = |names: &[String]| -> Vec<Arc<Handler>> {
            names
                .iter()
                .filter_map(|name| handlers.get(name.as_str()).cloned())
                .collect()
        };

        let node = |spec: &crate::config::LoggerSpec| Node {
            level: spec.level,
            handlers: attach(&spec.handlers),
            filters: pick(&spec.filters),
            propagate: spec.propagate,
        };
        let loggers = config
            .loggers
            .iter()
            .map(|(name, spec)| (name.clone(), node(spec)))
            .collect();
        let root = node(&config.root);

        Ok(Registry::new(root, loggers, handlers.into_values().collect()))
    }

    /// [`Self::apply`], then makes the result the active registry.
    ///
    /// # Errors
    /// See [`Self::apply`]; the previous registry stays active on error.
    pub fn install(&self, config: &DeclarativeConfig) -> Result<Registry, Error> {
        let registry = self.apply(config)?;
        *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(registry.clone());

        #[cfg(feature = "log-bridge")]
        bridge::register();

        internal::debug(
            "INIT",
            &format!(
                "Installed registry: root={}, handlers={:?}, loggers={}",
                config.root.level,
                registry.handler_names(),
                config.loggers.len()
            ),
        );
        Ok(registry)
    }

    fn formatter(&self, spec: &FormatterSpec, app_name: &AppName) -> Result<Arc<dyn Formatter>, Error> {
        let timestamp = TimestampFormat::new()
            .pattern(spec.datefmt.as_deref())
            .utc(spec.utc);

        let formatter: Arc<dyn Formatter> = match &spec.rule {
            RenderRule::Pattern { format } => Arc::new(
                PatternFormatter::new(format.clone(), app_name.clone()).timestamp_format(timestamp),
            ),
            RenderRule::Renderer {
                renderer: RendererKind::Json,
            } => Arc::new(JsonFormatter::new(app_name.clone()).timestamp_format(timestamp)),
            RenderRule::Renderer {
                renderer: RendererKind::Text,
            } => Arc::new(TextFormatter::new(app_name.clone()).timestamp_format(timestamp)),
            RenderRule::Renderer {
                renderer: RendererKind::Custom(name),
            } => self
                .renderers
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnregisteredRenderer(name.clone()))?,
        };
        Ok(formatter)
    }

    fn filter(&self, spec: &FilterSpec) -> Result<Arc<dyn Filter>, Error> {
        match spec {
            FilterSpec::Custom { name } => self
                .filters
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnregisteredFilter(name.clone())),
            builtin => filter::builtin(builtin)
                .ok_or_else(|| Error::UnregisteredFilter(format!("{builtin:?}"))),
        }
    }
}
