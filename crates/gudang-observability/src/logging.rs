//! Structured logging with request context.
//!
//! One logger is created per request. Entries go to stderr, which Spin
//! forwards to the component log, either as one JSON object per line or in
//! a compact human format for `spin up` sessions.

use std::fmt;
use std::time::Instant;

use gudang_core::{LogConfig, RequestId};
use serde::Serialize;
use serde_json::{Map, Value};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name as written in `gudang.toml` or a Spin variable.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// One log line.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Extra fields, flattened into the JSON object in key order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Microseconds since the request's logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[WARN] +1200us Products fetch failed error="HTTP 503" section="catalog-results"`
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}]", self.level);
        if let Some(elapsed) = self.elapsed_us {
            line.push_str(&format!(" +{}us", elapsed));
        }
        line.push(' ');
        line.push_str(&self.message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}={}", key, value));
        }
        line
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Human,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is JSON.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" | "pretty" => Self::Human,
            _ => Self::Json,
        }
    }
}

/// Structured logger with request context.
///
/// Every entry carries the request id, so a page's shell, section fills and
/// fetch failures can be correlated in the platform log.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    created: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            created: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Apply level and format from the site's `[log]` settings.
    /// An unknown level falls back to `info`.
    pub fn with_config(mut self, config: &LogConfig) -> Self {
        self.min_level = LogLevel::parse(&config.level).unwrap_or(LogLevel::Info);
        self.format = LogFormat::parse(&config.format);
        self
    }

    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn debug(&self, message: &str) {
        self.event(LogLevel::Debug, message).emit();
    }

    pub fn info(&self, message: &str) {
        self.event(LogLevel::Info, message).emit();
    }

    /// Whether entries at this level are written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Start an entry at any level.
    pub fn event(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: Map::new(),
        }
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Error, message)
    }

    fn write(&self, entry: &LogEntry) {
        let line = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        eprintln!("{}", line);
    }
}

/// Fluent builder for one entry.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Map<String, Value>,
}

impl LogBuilder<'_> {
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.into()));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Attach a failure under `error`, with its source chain when the error
    /// renders one in alternate form.
    pub fn field_error(self, error: &dyn fmt::Display) -> Self {
        self.field("error", format!("{:#}", error))
    }

    /// Build the entry without writing it.
    pub fn build(self) -> LogEntry {
        let logger = self.logger;
        LogEntry {
            level: self.level,
            message: self.message,
            request_id: logger.request_id.to_string(),
            workload: logger.workload.clone(),
            route: logger.route.clone(),
            fields: self.fields,
            elapsed_us: Some(logger.created.elapsed().as_micros() as u64),
        }
    }

    /// Write the entry if its level is enabled.
    pub fn emit(self) {
        if !self.logger.enabled(self.level) {
            return;
        }
        let logger = self.logger;
        logger.write(&self.build());
    }
}
