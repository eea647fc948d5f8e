//! Main logger implementation

use super::{
    color::Colorizer,
    env::EnvConfig,
    error::{LoggerError, Result},
    formatter::Formatter,
    log_level::LogLevel,
    pattern::NamespacePattern,
    request::LogRequest,
    sink::Sink,
};
use crate::formatters::TextFormatter;
use chrono::Utc;
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Separator placed between a parent namespace and a child name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A namespaced logger.
///
/// Whether the logger is enabled, its threshold and its colorizer are fixed
/// at construction from `DEBUG`, `DEBUG_LEVEL` and `DEBUG_COLOR`. The
/// logger is `Send` but not `Sync`: emissions on one instance must be
/// serialized by the caller.
///
/// # Example
///
/// ```
/// use ns_debug_logger::prelude::*;
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder("app:db").sink(buffer.sink()).build()?;
/// logger.error("connection refused");
///
/// if logger.is_enabled() {
///     assert!(buffer.contents().starts_with("app:db [ERROR] connection refused"));
/// }
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger {
    namespace: String,
    enabled: bool,
    threshold: LogLevel,
    sink: Sink,
    formatter: Arc<dyn Formatter>,
    colorizer: Colorizer,
    last_call: Cell<Option<Instant>>,
}

impl Logger {
    /// Build a logger writing to stdout with the text formatter.
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        Self::builder(namespace).build()
    }

    #[must_use]
    pub fn builder(namespace: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(namespace)
    }

    /// Build a child logger named `<namespace>:<subname>`.
    ///
    /// The child shares this logger's sink and formatter. Enabled flag,
    /// threshold and colorizer are recomputed from the current environment.
    pub fn child(&self, subname: &str) -> Result<Logger> {
        self.child_builder(subname)?.build()
    }

    /// Like [`Logger::child`], but returns the builder so further options
    /// can be applied after the inherited ones.
    pub fn child_builder(&self, subname: &str) -> Result<LoggerBuilder> {
        if subname.is_empty() {
            return Err(LoggerError::InvalidNamespace);
        }

        let namespace = format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, subname);
        Ok(Logger::builder(namespace)
            .sink(self.sink.clone())
            .shared_formatter(Arc::clone(&self.formatter)))
    }

    /// Emit `message` at `level` if the logger is enabled and the level
    /// reaches the threshold.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if !self.is_level_enabled(level) {
            return;
        }

        let now = Instant::now();
        let last_call = self.last_call.get().unwrap_or(now);

        let request = LogRequest {
            level,
            namespace: &self.namespace,
            message: message.as_ref(),
            sink: &self.sink,
            delay: now.saturating_duration_since(last_call),
            colorizer: &self.colorizer,
            timestamp: Utc::now(),
        };
        self.formatter.log(&request);

        // Taken after dispatch: the next delay excludes this formatter call.
        self.last_call.set(Some(Instant::now()));
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether the namespace was admitted by the `DEBUG` pattern.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Whether a message at `level` would reach the formatter.
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.enabled && self.threshold <= level
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn colorizer(&self) -> Colorizer {
        self.colorizer
    }

    /// Whether any message has been emitted yet.
    pub fn has_emitted(&self) -> bool {
        self.last_call.get().is_some()
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("enabled", &self.enabled)
            .field("threshold", &self.threshold)
            .field("sink", &self.sink)
            .field("colorizer", &self.colorizer)
            .field("last_call", &self.last_call.get())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// Options are applied in call order on top of the environment-derived
/// defaults. They can replace the sink and the formatter only.
///
/// # Example
/// ```
/// use ns_debug_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .sink(Sink::stderr())
///     .formatter(TextFormatter::new())
///     .build()?;
/// assert_eq!(logger.namespace(), "worker");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    namespace: String,
    sink: Sink,
    formatter: Arc<dyn Formatter>,
}

impl LoggerBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            sink: Sink::stdout(),
            formatter: Arc::new(TextFormatter::new()),
        }
    }

    /// Set the write destination; `None` installs a discarding sink.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Into<Option<Sink>>) -> Self {
        self.sink = sink.into().unwrap_or_else(Sink::discard);
        self
    }

    /// Replace the formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        self.shared_formatter(Arc::new(formatter))
    }

    /// Replace the formatter with one shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Build the Logger, reading the environment once.
    pub fn build(self) -> Result<Logger> {
        if self.namespace.is_empty() {
            return Err(LoggerError::InvalidNamespace);
        }

        let config = EnvConfig::from_env()?;
        self.build_from_config(&config)
    }

    /// Build against a configuration snapshot instead of reading the
    /// environment. Children of the result still read the environment.
    pub fn build_from_config(self, config: &EnvConfig) -> Result<Logger> {
        if self.namespace.is_empty() {
            return Err(LoggerError::InvalidNamespace);
        }

        let colorizer = if config.color {
            Colorizer::for_namespace(&self.namespace)
        } else {
            Colorizer::Plain
        };
        let enabled = NamespacePattern::compile(&config.pattern)?.is_match(&self.namespace);

        Ok(Logger {
            namespace: self.namespace,
            enabled,
            threshold: config.level,
            sink: self.sink,
            formatter: self.formatter,
            colorizer,
            last_call: Cell::new(None),
        })
    }
}
