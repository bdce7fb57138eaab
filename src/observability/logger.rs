//! Structured JSON logger.
//!
//! One log line per event, written synchronously with deterministic
//! key ordering: `event` first, `severity` second, remaining fields
//! alphabetical.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Uppercase name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured logger that outputs one JSON object per line.
pub struct Logger;

impl Logger {
    /// Log an event at INFO.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log an event at ERROR, to stderr.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Error, event, fields, &mut io::stderr());
    }

    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // BTreeMap gives the alphabetical field order; a duplicate key
        // keeps its last value.
        let sorted: BTreeMap<&str, &str> = fields.iter().copied().collect();

        let mut line = String::with_capacity(128);
        line.push('{');

        push_entry(&mut line, "event", event);
        line.push(',');
        push_entry(&mut line, "severity", severity.as_str());

        for (key, value) in sorted {
            line.push(',');
            push_entry(&mut line, key, value);
        }

        line.push('}');
        line.push('\n');

        // One write, one flush; logging failures are swallowed so they
        // never affect request handling.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Append `"key":"value"` with JSON string escaping.
fn push_entry(line: &mut String, key: &str, value: &str) {
    push_json_string(line, key);
    line.push(':');
    push_json_string(line, value);
}

fn push_json_string(line: &mut String, s: &str) {
    // Serializing a str cannot fail; the fallback keeps the line
    // valid JSON regardless.
    match serde_json::to_string(s) {
        Ok(quoted) => line.push_str(&quoted),
        Err(_) => line.push_str("\"\""),
    }
}
