//! Rotating file sink behavior on disk.

use l4py::{Initializer, LogConfigBuilder, LoggingBuilder, MapEnv, RotatingFileSink, Sink};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ENTRY: &str = "0123456789";

#[test]
fn creates_parent_directories_lazily() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("deeper").join("app.log");

    let sink = RotatingFileSink::new(&path, 0, 0);
    assert!(!path.exists());

    sink.write_entry("first").unwrap();
    sink.flush().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");
}

#[test]
fn appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    fs::write(&path, "earlier\n").unwrap();

    let sink = RotatingFileSink::new(&path, 0, 0);
    sink.write_entry("later").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
}

#[test]
fn rotation_keeps_at_most_backup_count_files() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = RotatingFileSink::new(&path, 20, 2);

    for i in 1..=4 {
        sink.write_entry(&format!("{ENTRY}-{i}")).unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "0123456789-4\n");
    assert_eq!(fs::read_to_string(sink.backup_path(1)).unwrap(), "0123456789-3\n");
    assert_eq!(fs::read_to_string(sink.backup_path(2)).unwrap(), "0123456789-2\n");
    assert!(!sink.backup_path(3).exists());
}

#[test]
fn single_backup_is_replaced() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = RotatingFileSink::new(&path, 12, 1);

    for i in 1..=3 {
        sink.write_entry(&format!("{ENTRY}{i}")).unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "01234567893\n");
    assert_eq!(fs::read_to_string(sink.backup_path(1)).unwrap(), "01234567892\n");
    assert!(!sink.backup_path(2).exists());
}

#[test]
fn zero_backup_count_grows_without_rotation() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = RotatingFileSink::new(&path, 5, 0);

    sink.write_entry(ENTRY).unwrap();
    sink.write_entry(ENTRY).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    assert!(!sink.backup_path(1).exists());
}

#[test]
fn oversized_entry_into_empty_file_does_not_rotate() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = RotatingFileSink::new(&path, 4, 3);

    sink.write_entry(ENTRY).unwrap();

    assert!(!sink.backup_path(1).exists());
}

#[test]
fn configured_file_sink_writes_json_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logs").join("billing.log");

    let config = LogConfigBuilder::new()
        .console_enabled(false)
        .file(&path)
        .build_with(&MapEnv::new())
        .unwrap();
    let registry = Initializer::new().app_name("billing").apply(&config).unwrap();

    let logger = registry.logger("app.payments");
    logger.info("charged");
    logger.debug("below threshold");
    registry.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let entry: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["app_name"], "billing");
    assert_eq!(entry["logger_name"], "app.payments");
    assert_eq!(entry["level"], "INFO");
    assert_eq!(entry["message"], "charged");
    assert_eq!(entry["file_name"], "file_output.rs");
}
