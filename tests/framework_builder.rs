//! Tests for the framework builder variant.

use l4py::builder::{DEFAULT_FRAMEWORK_LOGGER, DEFAULT_SQL_LOGGER};
use l4py::config::CONSOLE_HANDLER;
use l4py::{Error, FrameworkLogConfigBuilder, Level, LoggingBuilder, MapEnv, Settings};

#[test]
fn framework_logger_is_attached_and_does_not_propagate() {
    let config = FrameworkLogConfigBuilder::new()
        .build_with(&MapEnv::new())
        .unwrap();

    let framework = &config.loggers[DEFAULT_FRAMEWORK_LOGGER];
    assert_eq!(DEFAULT_FRAMEWORK_LOGGER, "django");
    assert_eq!(framework.level, config.root.level);
    assert_eq!(framework.handlers, config.root.handlers);
    assert!(!framework.propagate);
    assert!(!config.loggers.contains_key(DEFAULT_SQL_LOGGER));
}

#[test]
fn framework_level_defaults_to_resolved_root() {
    let env = MapEnv::new().with("L4PY_LOG_LEVEL_ROOT", "ERROR");
    let config = FrameworkLogConfigBuilder::new().build_with(&env).unwrap();
    assert_eq!(config.loggers["django"].level, Level::ERROR);
}

#[test]
fn explicit_framework_level() {
    let config = FrameworkLogConfigBuilder::new()
        .framework_level("WARNING")
        .build_with(&MapEnv::new())
        .unwrap();
    assert_eq!(config.loggers["django"].level, Level::WARNING);
}

#[test]
fn environment_wins_for_framework_logger() {
    let env = MapEnv::new().with("L4PY_LOG_LEVEL_django", "DEBUG");
    let config = FrameworkLogConfigBuilder::new()
        .framework_level("ERROR")
        .build_with(&env)
        .unwrap();
    let framework = &config.loggers["django"];
    assert_eq!(framework.level, Level::DEBUG);
    assert!(!framework.propagate);
}

#[test]
fn show_sql_adds_debug_data_access_logger() {
    let env = MapEnv::new().with("L4PY_LOG_LEVEL_django.db.backends", "ERROR");
    let config = FrameworkLogConfigBuilder::new()
        .show_sql(true)
        .build_with(&env)
        .unwrap();

    let sql = &config.loggers[DEFAULT_SQL_LOGGER];
    assert_eq!(sql.level, Level::DEBUG);
    assert_eq!(sql.handlers, config.root.handlers);
    assert!(!sql.propagate);
}

#[test]
fn show_sql_off_omits_data_access_logger() {
    let config = FrameworkLogConfigBuilder::new()
        .show_sql(true)
        .show_sql(false)
        .build_with(&MapEnv::new())
        .unwrap();
    assert!(!config.loggers.contains_key(DEFAULT_SQL_LOGGER));
}

#[test]
fn custom_framework_and_sql_names() {
    let config = FrameworkLogConfigBuilder::new()
        .framework("axum")
        .sql_logger("sqlx.query")
        .show_sql(true)
        .build_with(&MapEnv::new())
        .unwrap();
    assert!(!config.loggers["axum"].propagate);
    assert_eq!(config.loggers["sqlx.query"].level, Level::DEBUG);
    assert!(!config.loggers.contains_key("django"));
}

#[test]
fn sql_logger_follows_framework_name() {
    let config = FrameworkLogConfigBuilder::new()
        .framework("flask")
        .show_sql(true)
        .build_with(&MapEnv::new())
        .unwrap();
    assert_eq!(config.loggers["flask.db.backends"].level, Level::DEBUG);
    assert!(!config.loggers.contains_key(DEFAULT_SQL_LOGGER));
}

#[test]
fn shares_fluent_setters_with_base_builder() {
    let config = FrameworkLogConfigBuilder::new()
        .file_enabled(false)
        .add_logger("app", "INFO")
        .build_with(&MapEnv::new())
        .unwrap();
    assert_eq!(config.root.handlers, vec![CONSOLE_HANDLER]);
    assert_eq!(config.loggers["django"].handlers, vec![CONSOLE_HANDLER]);
    assert!(config.loggers["app"].propagate);
}

#[test]
fn invalid_framework_level_is_reported() {
    let err = FrameworkLogConfigBuilder::new()
        .framework_level("verbose")
        .build_with(&MapEnv::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLevel { ref logger, .. } if logger == "django"));
}

#[test]
fn seeded_from_settings() {
    let settings = Settings::parse("[levels]\nroot = \"ERROR\"\n\n[file]\nenabled = false\n").unwrap();
    let config = FrameworkLogConfigBuilder::from_settings(&settings)
        .show_sql(true)
        .build_with(&MapEnv::new())
        .unwrap();

    assert_eq!(config.root.level, Level::ERROR);
    assert_eq!(config.root.handlers, vec![CONSOLE_HANDLER]);
    let framework = &config.loggers[DEFAULT_FRAMEWORK_LOGGER];
    assert_eq!(framework.level, Level::ERROR);
    assert!(!framework.propagate);
    assert_eq!(config.loggers[DEFAULT_SQL_LOGGER].level, Level::DEBUG);
}
