//! Tests for the TOML settings file.

use l4py::config::{CONSOLE_HANDLER, ConsoleStream, FILE_HANDLER, RenderRule, SinkSpec};
use l4py::{Error, Level, LogConfigBuilder, LoggingBuilder, MapEnv, Settings};
use std::fs;
use tempfile::TempDir;

const FULL: &str = r#"
[app]
name = "billing"

[console]
json = true
stream = "stdout"

[file]
path = "/var/log/billing.log"
format = "%(levelname)s|%(message)s"
max_size_mb = 2
max_count = 3

[levels]
root = "WARNING"
loggers = { "app.db" = "DEBUG", "app.http" = 15 }

[timestamp]
format = "%H:%M:%S"
utc = true
"#;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.console.enabled);
    assert!(settings.file.json);
    assert_eq!(settings.file.max_size_mb, 10);
    assert_eq!(settings.file.max_count, 5);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("l4py.toml");
    fs::write(&path, "").unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn malformed_toml_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("l4py.toml");
    fs::write(&path, "[console\nenabled = yes").unwrap();
    assert!(matches!(Settings::load_from(&path), Err(Error::SettingsParse(_))));
}

#[test]
fn full_file_parses() {
    let settings = Settings::parse(FULL).unwrap();
    assert_eq!(settings.app_name().unwrap().as_str(), "billing");
    assert!(settings.console.json);
    assert_eq!(settings.console.stream, ConsoleStream::Stdout);
    assert_eq!(settings.file.path.as_deref(), Some("/var/log/billing.log"));
    assert_eq!(settings.levels.loggers.len(), 2);
    assert!(settings.timestamp.utc);
}

#[test]
fn settings_seed_the_builder() {
    let settings = Settings::parse(FULL).unwrap();
    let config = LogConfigBuilder::from_settings(&settings)
        .build_with(&MapEnv::new())
        .unwrap();

    assert_eq!(config.root.level, Level::WARNING);
    assert_eq!(config.loggers["app.db"].level, Level::DEBUG);
    assert_eq!(config.loggers["app.http"].level, Level::new(15));

    assert_eq!(
        config.handlers[CONSOLE_HANDLER].sink,
        SinkSpec::Console {
            stream: ConsoleStream::Stdout
        }
    );
    assert_eq!(
        config.handlers[FILE_HANDLER].sink,
        SinkSpec::RotatingFile {
            path: "/var/log/billing.log".into(),
            max_bytes: 2 * 1024 * 1024,
            backup_count: 3,
        }
    );

    let file_formatter = &config.formatters[FILE_HANDLER];
    assert!(matches!(
        &file_formatter.rule,
        RenderRule::Pattern { format } if format == "%(levelname)s|%(message)s"
    ));
    assert_eq!(file_formatter.datefmt.as_deref(), Some("%H:%M:%S"));
    assert!(file_formatter.utc);
}

#[test]
fn environment_still_wins_over_settings() {
    let settings = Settings::parse(FULL).unwrap();
    let env = MapEnv::new().with("L4PY_LOG_LEVEL_app.db", "ERROR");
    let config = LogConfigBuilder::from_settings(&settings)
        .build_with(&env)
        .unwrap();
    assert_eq!(config.loggers["app.db"].level, Level::ERROR);
}

#[test]
fn fluent_calls_refine_settings() {
    let settings = Settings::parse(FULL).unwrap();
    let config = LogConfigBuilder::from_settings(&settings)
        .file_enabled(false)
        .build_with(&MapEnv::new())
        .unwrap();
    assert_eq!(config.root.handlers, vec![CONSOLE_HANDLER]);
}

#[test]
fn negative_size_from_file_fails_at_build() {
    let settings = Settings::parse("[file]\nmax_size_mb = -1\n").unwrap();
    let err = LogConfigBuilder::from_settings(&settings)
        .build_with(&MapEnv::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRotation { key: "max_size_mb", value: -1 }));
}

#[test]
fn app_name_from_settings_is_published_once() {
    assert!(!Settings::default().init_app_name());

    let settings = Settings::parse("[app]\nname = \"billing\"\n").unwrap();
    assert!(settings.init_app_name());
    assert_eq!(l4py::app_name::global().as_str(), "billing");

    let other = Settings::parse("[app]\nname = \"ledger\"\n").unwrap();
    assert!(!other.init_app_name());
    assert_eq!(l4py::app_name::global().as_str(), "billing");
}
