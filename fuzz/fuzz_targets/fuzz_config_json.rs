#![no_main]
use libfuzzer_sys::fuzz_target;
use l4py::{DeclarativeConfig, Initializer};

fuzz_target!(|data: &str| {
    // Parsing and validation must reject bad input with an error, never a panic
    if let Ok(config) = DeclarativeConfig::from_json(data) {
        let _ = Initializer::new().app_name("fuzz").apply(&config);
    }
});
