//! Process-wide install. Everything lives in one test so no other test in
//! this binary races on the active registry.

use l4py::{Initializer, Level, LogConfigBuilder, LoggingBuilder, MapEnv, MemorySink, info};

#[test]
fn install_routes_unbound_loggers_and_log_facade() {
    assert!(l4py::runtime::installed().is_none());
    let early = l4py::get_logger!("service.api");
    assert_eq!(early.effective_level(), Level::WARNING);

    let config = LogConfigBuilder::new()
        .console_format("%(levelname)s %(name)s %(funcName)s %(message)s")
        .file_enabled(false)
        .add_logger("service", "DEBUG")
        .build_with(&MapEnv::new())
        .unwrap();
    let console = MemorySink::new();
    Initializer::new()
        .app_name("svc")
        .route("console", console.clone())
        .install(&config)
        .unwrap();

    // Handles created before install follow the active registry.
    assert_eq!(early.effective_level(), Level::DEBUG);
    info!(early, "listening on %s:%d", "0.0.0.0", 8080);

    #[cfg(feature = "log-bridge")]
    {
        log::debug!(target: "service::db", "pool ready");
        log::trace!(target: "service::db", "below every threshold");
    }

    let lines = console.lines();
    assert_eq!(
        lines[0],
        "INFO service.api install_routes_unbound_loggers_and_log_facade listening on 0.0.0.0:8080"
    );
    #[cfg(feature = "log-bridge")]
    assert_eq!(lines[1], "DEBUG service.db <unknown> pool ready");

    // Internal diagnostics reach a registry that lets l4py's own loggers through.
    let verbose = LogConfigBuilder::new()
        .console_format("%(name)s %(message)s")
        .file_enabled(false)
        .add_root_logger("DEBUG")
        .build_with(&MapEnv::new())
        .unwrap();
    let captured = MemorySink::new();
    Initializer::new()
        .route("console", captured.clone())
        .install(&verbose)
        .unwrap();
    assert!(captured.lines().iter().any(|line| line.starts_with("l4py.init Installed registry")));

    // Building a config against a DEBUG registry writes nothing.
    captured.clear();
    LogConfigBuilder::new()
        .add_logger("x", "INFO")
        .build_with(&MapEnv::new().with("L4PY_LOG_LEVEL_x", "DEBUG"))
        .unwrap();
    l4py::FrameworkLogConfigBuilder::new()
        .show_sql(true)
        .build_with(&MapEnv::new())
        .unwrap();
    assert!(captured.is_empty());

    l4py::runtime::uninstall().unwrap();
    assert!(l4py::runtime::installed().is_none());
    assert_eq!(early.effective_level(), Level::WARNING);
}
