//! Tests for the JSON renderer.

use l4py::fmt::TimestampFormat;
use l4py::{AppName, ExceptionInfo, Formatter, JsonFormatter, Level, LogRecord};
use serde_json::Value;

fn render(record: &LogRecord) -> Value {
    let line = JsonFormatter::new(AppName::new("billing")).format(record);
    assert!(!line.contains('\n'));
    serde_json::from_str(&line).unwrap()
}

#[test]
fn json_round_trips_core_fields() {
    let record = LogRecord::new("app.payments", Level::WARNING, "charged %s %d times")
        .arg("alice")
        .arg(3)
        .location("src/payments/service.rs", 42, "charge");

    let value = render(&record);
    assert_eq!(value["level"], "WARNING");
    assert_eq!(value["logger_name"], "app.payments");
    assert_eq!(value["message"], "charged alice 3 times");
    assert_eq!(value["app_name"], "billing");
    assert_eq!(value["file_name"], "service.rs");
    assert_eq!(value["line_number"], 42);
    assert_eq!(value["function_name"], "charge");
}

#[test]
fn json_key_order_is_fixed() {
    let line = JsonFormatter::new(AppName::new("a")).format(&LogRecord::new("x", Level::INFO, "m"));
    let keys = [
        "\"timestamp\"",
        "\"app_name\"",
        "\"logger_name\"",
        "\"level\"",
        "\"file_name\"",
        "\"line_number\"",
        "\"function_name\"",
        "\"message\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| line.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn json_omits_exception_when_absent() {
    let value = render(&LogRecord::new("x", Level::INFO, "m"));
    assert!(value.get("exception").is_none());
}

#[test]
fn json_includes_trace_when_present() {
    let record = LogRecord::new("x", Level::ERROR, "failed")
        .exception(ExceptionInfo::new("ParseError", "bad digit").frame("src/main.rs", 9, "main"));

    let value = render(&record);
    let trace = value["exception"].as_str().unwrap();
    assert!(trace.starts_with("Traceback (most recent call last):"));
    assert!(trace.contains("File \"src/main.rs\", line 9, in main"));
    assert!(trace.ends_with("ParseError: bad digit"));
}

#[test]
fn json_unnamed_level_uses_label() {
    let value = render(&LogRecord::new("x", Level::new(25), "m"));
    assert_eq!(value["level"], "Level 25");
}

#[test]
fn json_interpolation_mismatch_keeps_literal() {
    let value = render(&LogRecord::new("x", Level::INFO, "%s and %s").arg("one"));
    assert_eq!(value["message"], "%s and %s");
}

#[test]
fn json_timestamp_uses_pattern() {
    let created = chrono::DateTime::parse_from_rfc3339("2024-05-01T13:45:12.345Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let formatter = JsonFormatter::new(AppName::default())
        .timestamp_format(TimestampFormat::new().pattern(Some("%Y/%m/%d %H:%M")).utc(true));

    let line = formatter.format(&LogRecord::new("x", Level::INFO, "m").created(created));
    let value: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["timestamp"], "2024/05/01 13:45");
}
