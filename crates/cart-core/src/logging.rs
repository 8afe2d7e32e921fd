//! Structured logging with session context.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Cart session the entry belongs to.
    pub session_id: String,
    /// Emitting component (e.g. "cart-view").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Structured logger with session context.
///
/// Entries go to stderr. A logger built with [`StructuredLogger::with_capture`]
/// additionally keeps every emitted entry in memory, which tests use to
/// assert on what was logged.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: String,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    capture: Option<Arc<Mutex<Vec<LogEntry>>>>,
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

impl StructuredLogger {
    /// Create a new logger for a cart session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            capture: None,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Keep emitted entries in memory as well.
    pub fn with_capture(mut self) -> Self {
        self.capture = Some(Arc::new(Mutex::new(Vec::new())));
        self
    }

    /// Entries captured so far (empty unless built with `with_capture`).
    pub fn captured(&self) -> Vec<LogEntry> {
        self.capture
            .as_ref()
            .and_then(|c| c.lock().ok().map(|entries| entries.clone()))
            .unwrap_or_default()
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, HashMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, HashMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, HashMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, HashMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.clone(),
            component: self.component.clone(),
            fields,
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        eprintln!("{}", output);

        if let Some(capture) = &self.capture {
            if let Ok(mut entries) = capture.lock() {
                entries.push(entry);
            }
        }
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a float field.
    pub fn field_f64(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_level_filters_entries() {
        let logger = StructuredLogger::new("s-1").with_capture();
        logger.debug("hidden");
        logger.info("shown");

        let entries = logger.captured();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(entries[0].session_id, "s-1");
    }

    #[test]
    fn test_builder_fields_in_json() {
        let logger = StructuredLogger::new("s-2")
            .with_component("cart-view")
            .with_capture();
        logger
            .warn_builder("Update rejected")
            .field("reason", "stock")
            .field_i64("product_id", 4)
            .emit();

        let entry = &logger.captured()[0];
        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "warn");
        assert_eq!(json["component"], "cart-view");
        assert_eq!(json["product_id"], 4);
        assert_eq!(json["reason"], "stock");
    }

    #[test]
    fn test_human_format() {
        let logger = StructuredLogger::new("s-3")
            .with_format(LogFormat::Human)
            .with_capture();
        logger.info_builder("Rendered").field_bool("empty", true).emit();
        assert_eq!(logger.captured()[0].to_human(), "[INFO] Rendered | empty=true");
    }

    #[test]
    fn test_clones_share_capture() {
        let logger = StructuredLogger::new("s-4").with_capture();
        let clone = logger.clone();
        clone.error("boom");
        assert_eq!(logger.captured().len(), 1);
    }
}
