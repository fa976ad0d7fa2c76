use macos_use_mcp::audit::{redact_arguments, AuditLogger, REDACTED, UNPARSEABLE};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn read_lines(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_record_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let logger = AuditLogger::new(Some(&path)).unwrap();
    assert!(logger.is_enabled());

    logger.log_tool_call(
        "type_text",
        r#"{"text":"hello","password":"hunter2"}"#,
        "success",
        Duration::from_millis(250),
    );
    logger.close();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let record = &lines[0];
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["msg"], "tool_invocation");
    assert_eq!(record["tool"], "type_text");
    assert_eq!(record["status"], "success");
    assert_eq!(record["duration_seconds"], 0.25);
    assert!(record["time"].is_string());
    assert!(record["timestamp"].is_string());

    let arguments: Value = serde_json::from_str(record["arguments"].as_str().unwrap()).unwrap();
    assert_eq!(arguments, json!({"text": "hello", "password": REDACTED}));
}

#[test]
fn test_redaction_recurses_into_objects_and_arrays() {
    let raw = json!({
        "user": "alice",
        "Auth": {"API_KEY": "k", "region": "eu"},
        "steps": [{"session_id": "s", "tool": "click"}, "plain", 3],
        "db_password_hint": "x"
    })
    .to_string();

    let redacted: Value = serde_json::from_str(&redact_arguments(&raw)).unwrap();
    assert_eq!(
        redacted,
        json!({
            "user": "alice",
            "Auth": {"API_KEY": REDACTED, "region": "eu"},
            "steps": [{"session_id": REDACTED, "tool": "click"}, "plain", 3],
            "db_password_hint": REDACTED
        })
    );
}

#[test]
fn test_redaction_edge_inputs() {
    assert_eq!(redact_arguments(""), "{}");
    assert_eq!(redact_arguments("not json"), UNPARSEABLE);
    assert_eq!(redact_arguments("[1, 2]"), UNPARSEABLE);
    assert_eq!(redact_arguments("{}"), "{}");
}

#[test]
fn test_disabled_logger_writes_nothing() {
    let logger = AuditLogger::new(None).unwrap();
    assert!(!logger.is_enabled());
    logger.log_tool_call("click", "{}", "success", Duration::ZERO);

    let empty = AuditLogger::new(Some(Path::new(""))).unwrap();
    assert!(!empty.is_enabled());
    assert!(!AuditLogger::disabled().is_enabled());
}

#[test]
fn test_open_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("audit.jsonl");
    let err = AuditLogger::new(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("failed to open audit log"));
}

#[test]
fn test_close_is_idempotent_and_stops_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let logger = AuditLogger::new(Some(&path)).unwrap();

    logger.log_tool_call("click", "{}", "success", Duration::ZERO);
    logger.close();
    logger.close();
    assert!(!logger.is_enabled());

    logger.log_tool_call("click", "{}", "success", Duration::ZERO);
    assert_eq!(read_lines(&path).len(), 1);
}

#[test]
fn test_appends_to_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");

    for _ in 0..2 {
        let logger = AuditLogger::new(Some(&path)).unwrap();
        logger.log_tool_call("get_clipboard", "", "success", Duration::ZERO);
        logger.close();
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["arguments"], "{}");
}

#[test]
fn test_concurrent_writers_produce_whole_lines() {
    const THREADS: usize = 8;
    const CALLS: usize = 50;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let logger = Arc::new(AuditLogger::new(Some(&path)).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..CALLS {
                    let args = json!({"thread": t, "call": i, "text": "x".repeat(200)}).to_string();
                    logger.log_tool_call("type_text", &args, "success", Duration::from_millis(1));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.close();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), THREADS * CALLS);
    assert!(lines.iter().all(|line| line["tool"] == "type_text"));
}
