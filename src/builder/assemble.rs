//! Pure steps from builder state + environment to a validated artifact.
//! Nothing here logs: `build()` must not write to an installed registry.

use super::{BuilderState, MaxSize, SinkFormat, SinkState};
use crate::config::{
    CONSOLE_HANDLER, DeclarativeConfig, FILE_HANDLER, FormatterSpec, HandlerSpec, LoggerSpec,
    RendererKind, SinkSpec,
};
use crate::env::{self, Environment};
use crate::error::Error;
use crate::level::{Level, LevelToken};
use std::collections::BTreeMap;
use std::path::PathBuf;

const BYTES_PER_MB: i64 = 1024 * 1024;

pub(super) fn assemble(state: &BuilderState, env: &dyn Environment) -> Result<DeclarativeConfig, Error> {
    let mut config = DeclarativeConfig::empty(root_level(state, env)?);

    if state.console.enabled {
        add_sink(
            &mut config,
            CONSOLE_HANDLER,
            &state.console,
            state,
            SinkSpec::Console {
                stream: state.console_stream,
            },
        );
    }

    if state.file.enabled {
        let (max_bytes, backup_count) = rotation(state)?;
        let path = state
            .file_path
            .clone()
            .unwrap_or_else(|| default_file_path(env));
        add_sink(
            &mut config,
            FILE_HANDLER,
            &state.file,
            state,
            SinkSpec::RotatingFile {
                path,
                max_bytes,
                backup_count,
            },
        );
    }

    config.filters.clone_from(&state.filters);
    config.root.filters = state.filters.keys().cloned().collect();
    config.loggers = logger_levels(state, env)?
        .into_iter()
        .map(|(name, level)| {
            let spec = LoggerSpec {
                level,
                handlers: config.root.handlers.clone(),
                filters: config.root.filters.clone(),
                propagate: true,
            };
            (name, spec)
        })
        .collect();

    config.validate()?;
    Ok(config)
}

/// Explicit root level, else `L4PY_LOG_LEVEL_ROOT`, else INFO.
pub(super) fn root_level(state: &BuilderState, env: &dyn Environment) -> Result<Level, Error> {
    let token = state
        .root_level
        .clone()
        .unwrap_or_else(|| env::root_level(env));
    resolve("root", &token)
}

/// Explicit per-logger levels with environment overrides laid on top.
/// Tokens are validated after the merge, so a bad explicit value replaced by
/// the environment is never reported.
pub(super) fn logger_levels(
    state: &BuilderState,
    env: &dyn Environment,
) -> Result<BTreeMap<String, Level>, Error> {
    let mut merged = state.loggers.clone();
    merged.extend(
        env::logger_overrides(env)
            .into_iter()
            .map(|over| (over.logger, over.level)),
    );

    merged
        .iter()
        .map(|(name, token)| resolve(name, token).map(|level| (name.clone(), level)))
        .collect()
}

fn resolve(logger: &str, token: &LevelToken) -> Result<Level, Error> {
    token.resolve().map_err(|_| Error::InvalidLevel {
        logger: logger.to_string(),
        value: token.raw(),
    })
}

/// `(max_bytes, backup_count)` after range checks.
pub(super) fn rotation(state: &BuilderState) -> Result<(u64, u32), Error> {
    let max_bytes = match state.file_max_size {
        MaxSize::Megabytes(mb) => mb
            .checked_mul(BYTES_PER_MB)
            .and_then(|bytes| u64::try_from(bytes).ok())
            .ok_or(Error::InvalidRotation {
                key: "max_size_mb",
                value: mb,
            })?,
        MaxSize::Bytes(bytes) => u64::try_from(bytes).map_err(|_| Error::InvalidRotation {
            key: "max_bytes",
            value: bytes,
        })?,
    };

    let backup_count =
        u32::try_from(state.file_max_count).map_err(|_| Error::InvalidRotation {
            key: "max_count",
            value: state.file_max_count,
        })?;

    Ok((max_bytes, backup_count))
}

/// `<app>-<host>.log` in the working directory.
fn default_file_path(env: &dyn Environment) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.log",
        env::app_name(env),
        env::host_name(env)
    ))
}

/// Registers formatter and handler under `name` and attaches the handler to root.
fn add_sink(
    config: &mut DeclarativeConfig,
    name: &str,
    sink_state: &SinkState,
    state: &BuilderState,
    sink: SinkSpec,
) {
    let mut formatter = match &sink_state.format {
        SinkFormat::Text => FormatterSpec::renderer(RendererKind::Text),
        SinkFormat::Json => FormatterSpec::renderer(RendererKind::Json),
        SinkFormat::Pattern(pattern) => FormatterSpec::pattern(pattern.clone()),
        SinkFormat::Renderer(custom) => FormatterSpec::renderer(RendererKind::from(custom.clone())),
    };
    formatter.datefmt.clone_from(&state.timestamp_format);
    formatter.utc = state.utc;

    config.formatters.insert(name.to_string(), formatter);
    config.handlers.insert(
        name.to_string(),
        HandlerSpec {
            sink,
            formatter: name.to_string(),
            filters: state.filters.keys().cloned().collect(),
        },
    );
    config.root.handlers.push(name.to_string());
}
