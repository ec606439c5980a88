// crates/ssm-env-broker/tests/sinks.rs
// ============================================================================
// Module: Environment Sink Tests
// Description: Tests for env file, workflow command, and memory sinks.
// Purpose: Validate record formats and all-or-nothing export behavior.
// Dependencies: ssm-env-broker, ssm-env-core, tempfile
// ============================================================================

//! ## Overview
//! Exercises the broker's [`ssm_env_core::EnvironmentSink`] implementations.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use ssm_env_broker::GithubEnvFileSink;
use ssm_env_broker::MemorySink;
use ssm_env_broker::WorkflowCommandSink;
use ssm_env_core::EnvironmentSink;
use ssm_env_core::ParameterMap;
use ssm_env_core::SinkError;
use tempfile::tempdir;

use crate::common::FailingWriter;
use crate::common::SharedBuffer;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sample_map() -> ParameterMap {
    [("app_DB_HOST", "localhost"), ("app_NOTE", "line one\nline two")].into_iter().collect()
}

/// Parses `NAME<<DELIM\nVALUE\nDELIM\n` records back into pairs.
fn parse_records(contents: &str) -> Vec<(String, String)> {
    let mut records = Vec::new();
    let mut lines = contents.lines();
    while let Some(header) = lines.next() {
        let (name, delimiter) = header.split_once("<<").expect("record header");
        let mut value_lines = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            value_lines.push(line);
        }
        records.push((name.to_string(), value_lines.join("\n")));
    }
    records
}

// ============================================================================
// SECTION: Env File Sink
// ============================================================================

#[test]
fn env_file_sink_appends_delimited_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("github_env");
    fs::write(&path, "EXISTING=1\n").unwrap();
    let sink = GithubEnvFileSink::new(&path);

    sink.export(&sample_map()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let appended = contents.strip_prefix("EXISTING=1\n").expect("existing content kept");
    assert_eq!(
        parse_records(appended),
        vec![
            ("app_DB_HOST".to_string(), "localhost".to_string()),
            ("app_NOTE".to_string(), "line one\nline two".to_string()),
        ]
    );
    assert!(appended.lines().next().unwrap().starts_with("app_DB_HOST<<ghadelimiter_"));
}

#[test]
fn env_file_sink_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("created_env");
    let sink = GithubEnvFileSink::new(&path);

    sink.export(&[("A", "1")].into_iter().collect()).unwrap();

    assert_eq!(parse_records(&fs::read_to_string(&path).unwrap()), vec![(
        "A".to_string(),
        "1".to_string()
    )]);
}

#[test]
fn env_file_sink_rejects_multiline_name_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("github_env");
    let sink = GithubEnvFileSink::new(&path);
    let map: ParameterMap = [("A", "1"), ("B\nC", "2")].into_iter().collect();

    let err = sink.export(&map).unwrap_err();

    assert!(matches!(err, SinkError::InvalidVariable { .. }));
    assert!(!path.exists());
}

#[test]
fn env_file_sink_skips_file_for_empty_map() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("github_env");
    let sink = GithubEnvFileSink::new(&path);

    sink.export(&ParameterMap::new()).unwrap();

    assert!(!path.exists());
}

#[test]
fn env_file_sink_reports_unwritable_target() {
    let dir = tempdir().unwrap();
    let sink = GithubEnvFileSink::new(dir.path());

    let err = sink.export(&sample_map()).unwrap_err();

    assert!(matches!(err, SinkError::WriteFailed(_)));
}

// ============================================================================
// SECTION: Workflow Command Sink
// ============================================================================

#[test]
fn command_sink_emits_escaped_set_env_lines() {
    let buffer = SharedBuffer::new();
    let sink = WorkflowCommandSink::new(buffer.clone());

    sink.export(&sample_map()).unwrap();

    assert_eq!(
        buffer.to_string_lossy(),
        "::set-env name=app_DB_HOST::localhost\n::set-env name=app_NOTE::line one%0Aline two\n"
    );
}

#[test]
fn command_sink_writes_nothing_when_validation_fails() {
    let buffer = SharedBuffer::new();
    let sink = WorkflowCommandSink::new(buffer.clone());
    let map: ParameterMap = [("", "orphan"), ("A", "1")].into_iter().collect();

    assert!(sink.export(&map).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn command_sink_surfaces_write_failures() {
    let sink = WorkflowCommandSink::new(FailingWriter);

    let err = sink.export(&sample_map()).unwrap_err();

    assert!(err.to_string().contains("simulated write failure"));
}

// ============================================================================
// SECTION: Memory Sink
// ============================================================================

#[test]
fn memory_sink_accumulates_with_overwrite() {
    let sink = MemorySink::new();

    sink.export(&[("A", "1"), ("B", "2")].into_iter().collect()).unwrap();
    sink.export(&[("A", "3")].into_iter().collect()).unwrap();

    let snapshot = sink.snapshot();
    assert_eq!(snapshot.get("A"), Some("3"));
    assert_eq!(snapshot.get("B"), Some("2"));
}
