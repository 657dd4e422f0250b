//! Tests for literal `%(attr)s` patterns.

use chrono::{DateTime, Utc};
use l4py::fmt::TimestampFormat;
use l4py::{AppName, ExceptionInfo, Formatter, Level, LogRecord, PatternFormatter};

fn pinned() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T13:45:12.345Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn record() -> LogRecord {
    LogRecord::new("app.db", Level::WARNING, "slow query: %dms")
        .arg(1250)
        .location("src/db/pool.rs", 7, "acquire")
        .created(pinned())
}

#[test]
fn pattern_substitutes_record_attributes() {
    let formatter = PatternFormatter::new(
        "%(asctime)s %(levelname)-8s %(name)s %(module)s.%(funcName)s:%(lineno)d [%(app_name)s] %(message)s",
        AppName::new("billing"),
    )
    .timestamp_format(TimestampFormat::new().pattern(Some("%H:%M:%S")).utc(true));

    assert_eq!(
        formatter.format(&record()),
        "13:45:12 WARNING  app.db pool.acquire:7 [billing] slow query: 1250ms"
    );
}

#[test]
fn pattern_numeric_attributes() {
    let formatter = PatternFormatter::new("%(levelno)d %(msecs)03d %(filename)s", AppName::default());
    assert_eq!(formatter.format(&record()), "30 345 pool.rs");
}

#[test]
fn pattern_appends_trace() {
    let formatter = PatternFormatter::new("%(message)s", AppName::default());
    let line = formatter.format(&record().exception(ExceptionInfo::new("Timeout", "after 5s")));
    assert_eq!(
        line,
        "slow query: 1250ms\nTraceback (most recent call last):\nTimeout: after 5s"
    );
}

#[test]
fn validate_rejects_unknown_attribute() {
    let err = PatternFormatter::validate("%(asctime)s %(user)s").unwrap_err();
    assert!(err.contains("user"));
}

#[test]
fn validate_rejects_bad_conversion() {
    assert!(PatternFormatter::validate("%(name)d").is_err());
    assert!(PatternFormatter::validate("%(message)s %s").is_err());
}

#[test]
fn validate_accepts_known_attributes() {
    assert!(PatternFormatter::validate("%(asctime)s %(levelname)s %(name)s: %(message)s").is_ok());
    assert!(PatternFormatter::validate("plain text 100%%").is_ok());
}
