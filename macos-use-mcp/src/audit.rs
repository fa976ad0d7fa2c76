//! Append-only JSON-lines record of tool invocations.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const REDACTED: &str = "[REDACTED]";
pub const UNPARSEABLE: &str = "[unparseable]";

/// Key fragments whose values never reach the audit log.
const SENSITIVE_KEYS: &[&str] = &[
    "password",
    "secret",
    "token",
    "api_key",
    "credential",
    "credentials",
    "private_key",
    "access_token",
    "refresh_token",
    "authorization",
    "bearer",
    "session_id",
    "cookie",
    "passphrase",
    "encryption_key",
    "decryption_key",
];

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("failed to open audit log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct AuditRecord<'a> {
    time: String,
    level: &'static str,
    msg: &'static str,
    tool: &'a str,
    arguments: String,
    status: &'a str,
    duration_seconds: f64,
    timestamp: String,
}

#[derive(Default)]
struct AuditState {
    enabled: bool,
    sink: Option<Mutex<File>>,
}

/// Writes one JSON line per tool call.
///
/// Logging takes the state lock shared and serializes writes on the file
/// mutex; `close` takes it exclusively.
#[derive(Default)]
pub struct AuditLogger {
    state: RwLock<AuditState>,
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl AuditLogger {
    /// `None` or an empty path yields a disabled logger.
    pub fn new(path: Option<&Path>) -> Result<Self, AuditError> {
        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Ok(Self::disabled()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AuditError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            state: RwLock::new(AuditState {
                enabled: true,
                sink: Some(Mutex::new(file)),
            }),
        })
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.enabled && state.sink.is_some()
    }

    pub fn log_tool_call(&self, tool: &str, raw_args: &str, status: &str, duration: Duration) {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if !state.enabled {
            return;
        }
        let Some(sink) = state.sink.as_ref() else {
            return;
        };

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        let record = AuditRecord {
            time: now.clone(),
            level: "INFO",
            msg: "tool_invocation",
            tool,
            arguments: redact_arguments(raw_args),
            status,
            duration_seconds: duration.as_secs_f64(),
            timestamp: now,
        };

        let mut line = match serde_json::to_vec(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to encode audit record for {}: {}", tool, e);
                return;
            }
        };
        line.push(b'\n');

        let mut file = sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.write_all(&line) {
            warn!("Failed to write audit record for {}: {}", tool, e);
        }
    }

    /// Flushes and releases the file. Safe to call repeatedly.
    pub fn close(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.enabled = false;
        if let Some(sink) = state.sink.take() {
            let file = sink.into_inner().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = file.sync_all() {
                warn!("Failed to sync audit log on close: {}", e);
            }
        }
    }
}

/// Returns `raw` as compact JSON with sensitive values replaced by `[REDACTED]`.
pub fn redact_arguments(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "{}".to_string();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(mut map)) => {
            redact_object(&mut map);
            Value::Object(map).to_string()
        }
        _ => UNPARSEABLE.to_string(),
    }
}

fn redact_object(map: &mut Map<String, Value>) {
    for (key, value) in map.iter_mut() {
        if is_sensitive_key(key) {
            *value = Value::String(REDACTED.to_string());
            continue;
        }
        match value {
            Value::Object(nested) => redact_object(nested),
            Value::Array(items) => {
                for item in items.iter_mut() {
                    if let Value::Object(nested) = item {
                        redact_object(nested);
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| key == *sensitive || key.contains(sensitive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_key_matching() {
        assert!(is_sensitive_key("password"));
        assert!(is_sensitive_key("PASSWORD"));
        assert!(is_sensitive_key("db_password_hint"));
        assert!(is_sensitive_key("X-Api_Key"));
        assert!(is_sensitive_key("githubToken"));
        assert!(!is_sensitive_key("name"));
        assert!(!is_sensitive_key("window"));
    }

    #[test]
    fn test_redact_scalars_in_arrays_untouched() {
        let out = redact_arguments(r#"{"tags":["password","x"]}"#);
        assert_eq!(out, r#"{"tags":["password","x"]}"#);
    }
}
