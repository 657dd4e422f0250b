#![no_main]
use libfuzzer_sys::fuzz_target;
use l4py::fmt::interpolate;
use l4py::{AppName, Arg, Formatter, Level, LogRecord, PatternFormatter};

fuzz_target!(|data: &str| {
    // Must not panic on any template, matched or mismatched
    let args = [Arg::from("alice"), Arg::from(-3), Arg::from(2.5), Arg::from(true)];
    let _ = interpolate::positional(data, &args);
    let _ = interpolate::positional_or_literal(data, &args[..1]);

    // Also exercise the same string as a record pattern
    if PatternFormatter::validate(data).is_ok() {
        let formatter = PatternFormatter::new(data, AppName::new("fuzz"));
        let record = LogRecord::new("fuzz.target", Level::INFO, "msg %s").arg("x");
        let _ = formatter.format(&record);
    }
});
